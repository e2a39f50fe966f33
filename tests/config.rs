use fyyur::config::Config;
use fyyur::utils::datetime::{DateFormat, ParseMode};
use std::fs;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.display.date_format, "medium");
    assert!(!config.display.strict_dates);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Non-http base URL should fail
    config.server.base_url = "ftp://example.com".to_string();
    assert!(config.validate().is_err());

    // Unparseable base URL should fail
    config.server.base_url = "not a url".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid date format
    config.server.base_url = "https://fyyur.example.com".to_string();
    assert!(config.validate().is_ok());
    config.display.date_format = "%Y %".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.display.date_format = "full".to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_display_accessors() {
    let mut config = Config::default();
    assert_eq!(config.display.date_format(), DateFormat::Medium);
    assert_eq!(config.display.parse_mode(), ParseMode::Lenient);

    config.display.date_format = "%d/%m/%Y".to_string();
    config.display.strict_dates = true;
    assert_eq!(config.display.date_format(), DateFormat::Custom("%d/%m/%Y".to_string()));
    assert_eq!(config.display.parse_mode(), ParseMode::Strict);
}

#[test]
fn test_log_level_filter() {
    let mut config = Config::default();
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Info);

    config.logging.level = "debug".to_string();
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Debug);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"http://127.0.0.1:5000\""));
    assert!(toml_str.contains("date_format = \"medium\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[server]
base_url = "https://fyyur.example.com"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.server.base_url, "https://fyyur.example.com");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.display.date_format, "medium");
    assert!(!config.display.strict_dates);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.server.base_url, default_config.server.base_url);
    assert_eq!(config.display.date_format, default_config.display.date_format);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fyyur.toml");
    fs::write(
        &path,
        r#"
[display]
date_format = "full"
strict_dates = true
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.display.date_format(), DateFormat::Full);
    assert_eq!(config.display.parse_mode(), ParseMode::Strict);
}

#[test]
fn test_load_from_file_rejects_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fyyur.toml");

    fs::write(&path, "[server]\nbase_url = \"ftp://example.com\"\n").unwrap();
    assert!(Config::load_from_file(&path).is_err());

    fs::write(&path, "[server\n").unwrap();
    assert!(Config::load_from_file(&path).is_err());

    assert!(Config::load_from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_generate_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Fyyur Configuration File"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.server.base_url, Config::default().server.base_url);
}

#[test]
fn test_default_config_path() {
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("fyyur/config.toml"));
    }
}
