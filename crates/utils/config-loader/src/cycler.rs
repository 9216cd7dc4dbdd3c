use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct CyclerConfig {
    /// Table index the cursor starts on. Defaults to 0 (UTC-12).
    #[serde(default)]
    pub start_index: usize,
}

impl CyclerConfig {
    pub fn starting_at(start_index: usize) -> Self {
        Self { start_index }
    }
}
