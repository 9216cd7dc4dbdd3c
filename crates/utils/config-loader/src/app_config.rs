use crate::env::Env;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct BaseAppConfig {
    pub name: String,
    pub version: Option<String>,
    pub env: Option<String>,
    /// Timezone offset in hours from UTC, fractions allowed (e.g. 5.75 for UTC+5:45)
    pub timezone: Option<f64>,
}

impl BaseAppConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            env: None,
            timezone: None,
        }
    }

    pub fn with_timezone(mut self, hours: f64) -> Self {
        self.timezone = Some(hours);
        self
    }

    /// Deployment environment, `Env::Development` when unset.
    pub fn environment(&self) -> Env {
        self.env.as_deref().map(Env::from).unwrap_or(Env::Development)
    }
}
