pub mod app_config;
pub mod cycler;
pub mod env;
pub mod loader;
pub mod logging;
pub use loader::load_config;

// Re-exports
pub use config::ConfigError;
