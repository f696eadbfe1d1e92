use serde::{Deserialize, Serialize};

use crate::model::{KeywordsInput, Snippet};
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CreateSnippetRequest {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub keywords: Option<KeywordsInput>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoreRequest {
    ListSnippets,
    CreateSnippet(CreateSnippetRequest),
    DeleteSnippet { id: String },
    GetSettings,
    ReplaceSettings(Settings),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoreResponse {
    Snippets(Vec<Snippet>),
    Created(Snippet),
    Deleted(MessageResponse),
    Settings(Settings),
}
