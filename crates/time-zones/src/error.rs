use thiserror::Error;

/// Errors raised by the checked entry points of the offset cycler.
///
/// [`OffsetCycler::current`](crate::OffsetCycler::current) and
/// [`OffsetCycler::advance`](crate::OffsetCycler::advance) never fail.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum OffsetError {
    /// Index is past the end of the offset table.
    #[error("cursor index {index} is out of range for a table of {len} offsets")]
    IndexOutOfRange { index: usize, len: usize },

    /// Index is inside the table but can never be visited by the cycle.
    #[error("cursor index {index} is never visited by the cycle (last reachable index is {last})")]
    UnreachablePosition { index: usize, last: usize },

    /// Offset in hours cannot be represented as a `UtcOffset`.
    #[error("{hours} hours is not a representable UTC offset")]
    InvalidUtcOffset { hours: f64 },
}

impl OffsetError {
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn unreachable_position(index: usize, last: usize) -> Self {
        Self::UnreachablePosition { index, last }
    }

    pub fn invalid_utc_offset(hours: f64) -> Self {
        Self::InvalidUtcOffset { hours }
    }
}

pub type OffsetResult<T> = Result<T, OffsetError>;
