use gridline::config::Config;
use gridline::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.cell_width_px, 8);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert_eq!(config.layout.min_column_width_px, 40);
    assert_eq!(config.layout.schema_version, "v1");
    assert!(config.storage.write_behind);
    assert!(config.storage.directory.is_none());
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.ui.cell_width_px = 0;
    assert!(config.validate().is_err());

    config.ui.cell_width_px = 8;
    config.layout.min_column_width_px = 0;
    assert!(config.validate().is_err());

    config.layout.min_column_width_px = 5000;
    assert!(config.validate().is_err());

    config.layout.min_column_width_px = 40;
    config.layout.schema_version = "v1/../x".to_string();
    assert!(config.validate().is_err());

    config.layout.schema_version = "v2".to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[ui]
icon_theme = "unicode"

[layout]
schema_version = "v2"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert_eq!(config.layout.schema_version, "v2");
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.cell_width_px, 8);
    assert_eq!(config.layout.min_column_width_px, 40);
    assert!(config.storage.write_behind);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.cell_width_px, default_config.ui.cell_width_px);
    assert_eq!(config.layout.schema_version, default_config.layout.schema_version);
    assert_eq!(config.logging.level, default_config.logging.level);
}

#[test]
fn test_generate_and_reload_default_config() {
    let dir = std::env::temp_dir().join(format!("gridline-config-{}", std::process::id()));
    let path = dir.join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# gridline configuration file"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.layout.schema_version, "v1");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_storage_dir_override() {
    let mut config = Config::default();
    config.storage.directory = Some("/tmp/gridline-prefs".into());
    assert_eq!(config.storage_dir().unwrap(), std::path::PathBuf::from("/tmp/gridline-prefs"));
}
