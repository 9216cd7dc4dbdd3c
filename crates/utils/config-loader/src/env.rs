use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Env {
    #[serde(rename = "dev")]
    Development,
    Staging,
    Production,
    Unknown(String),
}

impl From<&str> for Env {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "development" | "dev" | "sit" => Env::Development,
            "staging" | "stg" => Env::Staging,
            "production" | "prod" => Env::Production,
            other => Env::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Env {
    fn from(value: String) -> Self {
        Env::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_aliases() {
        assert_eq!(Env::from("SIT"), Env::Development);
        assert_eq!(Env::from("stg"), Env::Staging);
        assert_eq!(Env::from(String::from("Prod")), Env::Production);
        assert_eq!(Env::from("qa"), Env::Unknown("qa".to_string()));
    }
}
