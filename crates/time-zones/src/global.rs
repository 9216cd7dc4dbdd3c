//! Process-wide cycler behind free functions.
//!
//! The instance is created on first use. Every call takes the lock for its
//! own duration only; interleaving between threads is unspecified.

use crate::{cycler::OffsetCycler, error::OffsetResult};
use logger::UtcOffset;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

static CYCLER: LazyLock<Mutex<OffsetCycler>> = LazyLock::new(|| Mutex::new(OffsetCycler::new()));

fn cycler() -> MutexGuard<'static, OffsetCycler> {
    // No code path panics while holding the lock, but a poisoned cursor is still valid.
    CYCLER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Offset under the process-wide cursor, in hours.
pub fn get_current() -> f64 {
    cycler().current()
}

/// Advance the process-wide cursor and return the new offset, in hours.
pub fn get_next() -> f64 {
    cycler().advance()
}

pub fn current_utc_offset() -> OffsetResult<UtcOffset> {
    cycler().current_utc_offset()
}
