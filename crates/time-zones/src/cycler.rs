use crate::{
    cursor::Cursor,
    error::{OffsetError, OffsetResult},
    table::OffsetTable,
};
use config_loader::cycler::CyclerConfig;
use logger::{UtcOffset, debug, trace, utc_offset_from_hours};

/// Cursor over the fixed [`OffsetTable`].
///
/// Starts at UTC-12 and steps east one entry per [`advance`](Self::advance).
/// After reaching UTC+13 the next step goes back to UTC-11; see
/// [`Cursor::WRAP_INDEX`] for why UTC+14 is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetCycler {
    table: OffsetTable,
    cursor: Cursor,
}

impl OffsetCycler {
    pub fn new() -> Self {
        Self::starting_at(Cursor::START)
    }

    pub fn starting_at(cursor: Cursor) -> Self {
        Self {
            table: OffsetTable,
            cursor,
        }
    }

    pub fn from_config(config: &CyclerConfig) -> OffsetResult<Self> {
        let cursor = Cursor::new(config.start_index)?;
        debug!(start_index = cursor.index(), "offset cycler configured");
        Ok(Self::starting_at(cursor))
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn table(&self) -> &OffsetTable {
        &self.table
    }

    /// Offset under the cursor, in hours.
    pub fn current(&self) -> f64 {
        self.table.get(self.cursor)
    }

    /// Move the cursor forward and return the offset it now points at.
    pub fn advance(&mut self) -> f64 {
        if self.cursor.is_at_wrap() {
            debug!(from = self.cursor.index(), "offset cursor wrapped");
        }
        self.cursor = self.cursor.advance();

        let hours = self.current();
        trace!(index = self.cursor.index(), hours, "advanced offset cursor");
        hours
    }

    /// Current offset as a [`UtcOffset`], e.g. 5.75 becomes +05:45.
    pub fn current_utc_offset(&self) -> OffsetResult<UtcOffset> {
        let hours = self.current();
        utc_offset_from_hours(hours).ok_or_else(|| OffsetError::invalid_utc_offset(hours))
    }
}

/// Endless: every call yields `Some`.
impl Iterator for OffsetCycler {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
