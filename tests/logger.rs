use fyyur::config::LoggingConfig;
use fyyur::logger;

#[test]
fn test_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("fyyur/fyyur.log"));
    }
}

#[test]
fn test_dispatch_with_logging_disabled() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert!(logger::dispatch(&config).is_ok());
}

#[test]
fn test_dispatch_rejects_invalid_level() {
    let config = LoggingConfig {
        enabled: true,
        level: "chatty".to_string(),
    };
    assert!(logger::dispatch(&config).is_err());
}
