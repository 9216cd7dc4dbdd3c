use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct LoggerConfig {
    #[serde(default = "default_max_level")]
    pub max_level: String,
}

fn default_max_level() -> String {
    "INFO".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_level: default_max_level(),
        }
    }
}

impl LoggerConfig {
    pub fn with_max_level(max_level: impl Into<String>) -> Self {
        Self {
            max_level: max_level.into(),
        }
    }
}
