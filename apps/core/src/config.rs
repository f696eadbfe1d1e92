use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_ENV: &str = "PORT";

const SNIPPETS_FILE_NAME: &str = "snippets.json";
const SETTINGS_FILE_NAME: &str = "settings.json";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("invalid {env} value '{value}'")]
    Env { env: &'static str, value: String },
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let base = stable_app_data_dir();
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
            config_path: base.join(CONFIG_FILE_NAME),
        }
    }
}

impl Config {
    pub fn snippets_path(&self) -> PathBuf {
        self.data_dir.join(SNIPPETS_FILE_NAME)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE_NAME)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn stable_app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("snipkeep")
}

/// Reads the TOML config at `path` (or the default location). A missing file yields
/// the defaults; keys absent from the file keep their default values.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| Config::default().config_path);

    let mut config = match std::fs::read_to_string(&config_path) {
        Ok(raw) => toml::from_str::<Config>(&raw).map_err(|source| ConfigError::Parse {
            path: config_path.clone(),
            source,
        })?,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(source) => {
            return Err(ConfigError::Read {
                path: config_path,
                source,
            })
        }
    };
    config.config_path = config_path;
    Ok(config)
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    let encoded = toml::to_string_pretty(config)?;
    let write_error = |source| ConfigError::Write {
        path: config.config_path.clone(),
        source,
    };
    if let Some(parent) = config.config_path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(&config.config_path, encoded).map_err(write_error)
}

/// Applies a `PORT` value taken from the environment.
pub fn apply_port_env(config: &mut Config, value: Option<String>) -> Result<(), ConfigError> {
    let Some(value) = value else {
        return Ok(());
    };
    config.port = value.trim().parse().map_err(|_| ConfigError::Env {
        env: PORT_ENV,
        value,
    })?;
    Ok(())
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.port == 0 {
        return Err(ConfigError::Invalid("port must be between 1 and 65535".into()));
    }

    if cfg.host.trim().is_empty() {
        return Err(ConfigError::Invalid("host is required".into()));
    }

    if cfg.data_dir.as_os_str().is_empty() {
        return Err(ConfigError::Invalid("data_dir is required".into()));
    }

    Ok(())
}
