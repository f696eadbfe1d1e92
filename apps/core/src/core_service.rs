use thiserror::Error;

use crate::config::Config;
use crate::contract::{CoreRequest, CoreResponse, CreateSnippetRequest, MessageResponse};
use crate::model::{IdGenerator, Snippet};
use crate::settings::{Settings, SettingsStore};
use crate::snippet_store::{SnippetStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("snippet not found: {0}")]
    NotFound(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Snippet and settings operations over the two JSON files. Nothing is cached:
/// every call re-reads what it needs from disk.
pub struct CoreService {
    snippets: SnippetStore,
    settings: SettingsStore,
    ids: IdGenerator,
}

impl CoreService {
    pub fn new(config: &Config) -> Self {
        Self::with_stores(
            SnippetStore::new(config.snippets_path()),
            SettingsStore::new(config.settings_path()),
        )
    }

    pub fn with_stores(snippets: SnippetStore, settings: SettingsStore) -> Self {
        Self {
            snippets,
            settings,
            ids: IdGenerator::new(),
        }
    }

    pub fn list_snippets(&self) -> Vec<Snippet> {
        self.snippets.list()
    }

    pub fn create_snippet(&self, request: CreateSnippetRequest) -> Result<Snippet, ServiceError> {
        let command = request
            .command
            .as_deref()
            .map(str::trim)
            .filter(|command| !command.is_empty())
            .ok_or_else(missing_fields)?
            .to_string();
        let keywords = request
            .keywords
            .as_ref()
            .map(|keywords| keywords.normalize())
            .unwrap_or_default();
        if keywords.is_empty() {
            return Err(missing_fields());
        }

        let snippet = Snippet {
            id: self.ids.next_id(),
            command,
            keywords,
            description: request
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        };

        let mut all = self.snippets.list();
        all.push(snippet.clone());
        self.snippets.replace_all(&all)?;
        log::info!("created snippet id={} total={}", snippet.id, all.len());
        Ok(snippet)
    }

    pub fn delete_snippet(&self, id: &str) -> Result<(), ServiceError> {
        let all = self.snippets.list();
        let before = all.len();
        let remaining: Vec<Snippet> = all.into_iter().filter(|s| s.id != id).collect();
        if remaining.len() == before {
            return Err(ServiceError::NotFound(id.to_string()));
        }

        self.snippets.replace_all(&remaining)?;
        log::info!("deleted snippet id={id} total={}", remaining.len());
        Ok(())
    }

    pub fn get_settings(&self) -> Settings {
        self.settings.get()
    }

    pub fn replace_settings(&self, settings: Settings) -> Result<Settings, ServiceError> {
        self.settings.replace(&settings)?;
        log::info!("settings saved auto_copy={}", settings.auto_copy);
        Ok(settings)
    }

    pub fn handle_command(&self, request: CoreRequest) -> Result<CoreResponse, ServiceError> {
        match request {
            CoreRequest::ListSnippets => Ok(CoreResponse::Snippets(self.list_snippets())),
            CoreRequest::CreateSnippet(payload) => {
                self.create_snippet(payload).map(CoreResponse::Created)
            }
            CoreRequest::DeleteSnippet { id } => {
                self.delete_snippet(&id)?;
                Ok(CoreResponse::Deleted(MessageResponse {
                    message: "Snippet deleted successfully".to_string(),
                }))
            }
            CoreRequest::GetSettings => Ok(CoreResponse::Settings(self.get_settings())),
            CoreRequest::ReplaceSettings(settings) => {
                self.replace_settings(settings).map(CoreResponse::Settings)
            }
        }
    }
}

fn missing_fields() -> ServiceError {
    ServiceError::Validation("Command and keywords are required".to_string())
}
