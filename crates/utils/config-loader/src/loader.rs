use config::{Config, ConfigError, File};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Load a config file (toml, json or yaml, picked by extension) into `T`.
pub fn load_config<T>(path: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let config_path =
        std::fs::canonicalize(PathBuf::from(path)).map_err(|e| ConfigError::Foreign(Box::new(e)))?;

    let settings = Config::builder()
        .add_source(File::from(config_path))
        .build()?;

    settings.try_deserialize::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app_config::BaseAppConfig, cycler::CyclerConfig, env::Env};
    use serde::Deserialize;
    use std::path::Path;

    #[derive(Debug, Deserialize)]
    struct Settings {
        app: BaseAppConfig,
        #[serde(default)]
        cycler: CyclerConfig,
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_toml_config() {
        let path = write_temp(
            "settings.toml",
            r#"
[app]
name = "zones"
env = "stg"
timezone = 5.75

[cycler]
start_index = 12
"#,
        );

        let settings: Settings = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.app.name, "zones");
        assert_eq!(settings.app.timezone, Some(5.75));
        assert_eq!(settings.app.environment(), Env::Staging);
        assert_eq!(settings.cycler, CyclerConfig::starting_at(12));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_json_config_defaults_start_index() {
        let path = write_temp("settings.json", r#"{ "app": { "name": "zones" } }"#);

        let settings: Settings = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.cycler.start_index, 0);
        assert_eq!(settings.app.timezone, None);
        assert_eq!(settings.app.environment(), Env::Development);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let missing = Path::new("/definitely/not/here/settings.toml");
        let result = load_config::<Settings>(missing.to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::Foreign(_))));
    }
}
