pub mod cursor;
pub mod cycler;
pub mod error;
pub mod global;
pub mod table;
pub use cursor::Cursor;
pub use cycler::OffsetCycler;
pub use error::{OffsetError, OffsetResult};
pub use global::{current_utc_offset, get_current, get_next};
pub use table::{OffsetTable, ZONES};

// Re-exports
pub use config_loader::cycler::CyclerConfig;
pub use logger::UtcOffset;
