use config_loader::{app_config::BaseAppConfig, logging::LoggerConfig};
use logger::{LoggingError, info, setup_logging};

#[test]
fn test_setup_logging_twice_does_not_fail() {
    let app_config = BaseAppConfig::new("tests").with_timezone(5.75);

    let guard = setup_logging(app_config.clone(), LoggerConfig::default(), None);
    assert!(guard.is_ok(), "first setup should install the subscriber");
    info!("subscriber installed");

    let again = setup_logging(
        app_config,
        LoggerConfig::with_max_level("DEBUG"),
        Some(vec!["logger=trace"]),
    );
    assert!(again.is_ok(), "second setup should skip re-init");
}

#[test]
fn test_setup_logging_rejects_bad_directive() {
    let result = setup_logging(
        BaseAppConfig::new("tests"),
        LoggerConfig::default(),
        Some(vec!["logger=notalevel"]),
    );

    assert!(matches!(
        result,
        Err(LoggingError::InvalidDirective { ref directive, .. }) if directive == "logger=notalevel"
    ));
}
