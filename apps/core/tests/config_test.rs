use snipkeep_core::config::{self, Config, ConfigError};

#[test]
fn accepts_default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.host, "0.0.0.0");
    assert!(cfg.data_dir.to_string_lossy().contains("snipkeep"));
    assert!(cfg.config_path.to_string_lossy().ends_with("config.toml"));
    assert!(config::validate(&cfg).is_ok());
}

#[test]
fn rejects_port_zero_and_blank_host() {
    let cfg = Config {
        port: 0,
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());

    let cfg = Config {
        host: "  ".into(),
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let cfg = config::load(Some(&path)).unwrap();

    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.config_path, path);
}

#[test]
fn partial_config_keeps_defaults_for_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 8123\ndata_dir = \"/srv/snippets\"\n").unwrap();

    let cfg = config::load(Some(&path)).unwrap();

    assert_eq!(cfg.port, 8123);
    assert_eq!(cfg.data_dir, std::path::PathBuf::from("/srv/snippets"));
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.snippets_path(), std::path::PathBuf::from("/srv/snippets/snippets.json"));
    assert_eq!(cfg.settings_path(), std::path::PathBuf::from("/srv/snippets/settings.json"));
}

#[test]
fn malformed_config_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number\"").unwrap();

    assert!(matches!(config::load(Some(&path)), Err(ConfigError::Parse { .. })));
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config {
        port: 4567,
        host: "127.0.0.1".into(),
        config_path: dir.path().join("nested").join("config.toml"),
        ..Default::default()
    };

    config::save(&cfg).unwrap();
    let loaded = config::load(Some(&cfg.config_path)).unwrap();

    assert_eq!(loaded, cfg);
}

#[test]
fn port_env_overrides_and_is_validated() {
    let mut cfg = Config::default();

    config::apply_port_env(&mut cfg, None).unwrap();
    assert_eq!(cfg.port, 3000);

    config::apply_port_env(&mut cfg, Some("8080".into())).unwrap();
    assert_eq!(cfg.port, 8080);

    let error = config::apply_port_env(&mut cfg, Some("eighty".into())).unwrap_err();
    assert!(error.to_string().contains("PORT"));
    assert_eq!(cfg.port, 8080);
}
