use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::snippet_store::{write_json_atomic, StoreError};

/// User preferences. Fields this crate does not know about are kept as posted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Settings {
    #[serde(rename = "autoCopy", default)]
    pub auto_copy: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Settings {
    pub fn with_auto_copy(auto_copy: bool) -> Self {
        Self {
            auto_copy,
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persisted settings, or the defaults when the file is absent or unreadable.
    pub fn get(&self) -> Settings {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Settings::default();
        };
        serde_json::from_str::<Settings>(&raw).unwrap_or_else(|error| {
            log::warn!("{} is unreadable, using defaults: {error}", self.path.display());
            Settings::default()
        })
    }

    pub fn replace(&self, settings: &Settings) -> Result<(), StoreError> {
        write_json_atomic(&self.path, settings)
    }
}
