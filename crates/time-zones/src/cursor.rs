use crate::{
    error::{OffsetError, OffsetResult},
    table::OffsetTable,
};

/// Position inside the [`OffsetTable`].
///
/// The index is private, so every `Cursor` in existence points at a valid
/// table entry and can be advanced without running off the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    pub const START: Cursor = Cursor(0);

    /// Index at which the next advance wraps back to the start.
    ///
    /// NOTE: this is `LEN - 2`, not `LEN - 1`, so the last table entry
    /// (UTC+14) is never reached. Looks like an off-by-one, but existing
    /// consumers depend on the observed sequence, so it stays.
    pub const WRAP_INDEX: usize = OffsetTable::LEN - 2;

    /// Checked construction for callers that resume at a known position.
    pub fn new(index: usize) -> OffsetResult<Self> {
        if index >= OffsetTable::LEN {
            return Err(OffsetError::index_out_of_range(index, OffsetTable::LEN));
        }
        if index > Self::WRAP_INDEX {
            return Err(OffsetError::unreachable_position(index, Self::WRAP_INDEX));
        }
        Ok(Self(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_at_wrap(self) -> bool {
        self.0 == Self::WRAP_INDEX
    }

    /// Reset to 0 when sitting on the wrap index, then step forward by one.
    pub(crate) fn advance(self) -> Self {
        let base = if self.is_at_wrap() { 0 } else { self.0 };
        Self(base + 1)
    }
}

impl TryFrom<usize> for Cursor {
    type Error = OffsetError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}
