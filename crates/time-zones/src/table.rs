use crate::cursor::Cursor;

/// Standard UTC offsets in hours, west to east.
pub const ZONES: [f64; OffsetTable::LEN] = [
    -12.0, -11.0, -10.0, -9.5, -9.0, -8.0, -7.0, -6.0, -5.0, -4.0, -3.5, -3.0, -2.0, -1.0, 0.0,
    1.0, 2.0, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 5.75, 6.0, 6.5, 7.0, 8.0, 8.75, 9.0, 9.5, 10.0, 10.5,
    11.0, 12.0, 12.75, 13.0, 14.0,
];

/// Read-only view over [`ZONES`].
///
/// Lookups take a [`Cursor`], which is always in bounds, so they cannot fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetTable;

impl OffsetTable {
    pub const LEN: usize = 38;

    pub fn get(&self, cursor: Cursor) -> f64 {
        ZONES[cursor.index()]
    }

    pub fn as_slice(&self) -> &'static [f64] {
        &ZONES
    }

    pub fn contains(&self, hours: f64) -> bool {
        ZONES.contains(&hours)
    }

    /// Largest offset in the table (UTC+14). The cycle never lands on it.
    pub fn max(&self) -> f64 {
        ZONES[Self::LEN - 1]
    }
}
