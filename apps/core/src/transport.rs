use serde::{Deserialize, Serialize};

use crate::assets;
use crate::contract::{CoreRequest, CoreResponse, CreateSnippetRequest};
use crate::core_service::{CoreService, ServiceError};
use crate::settings::Settings;

const JSON: &str = "application/json; charset=utf-8";

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET,HEAD,PUT,PATCH,POST,DELETE"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    InvalidRequest,
    NotFound,
    MethodNotAllowed,
    Store,
}

impl ErrorCode {
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidJson | Self::InvalidRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::Store => 500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: ErrorCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl HttpReply {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self {
                status,
                content_type: JSON,
                body,
            },
            Err(error) => Self::error(ErrorCode::Store, format!("failed to encode response: {error}")),
        }
    }

    fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        let status = code.status();
        let payload = ErrorResponse {
            error: message.into(),
            code,
        };
        Self {
            status,
            content_type: JSON,
            body: serde_json::to_vec(&payload).unwrap_or_default(),
        }
    }

    /// Rejects a request whose body never reached routing.
    pub fn unreadable_body(message: impl Into<String>) -> Self {
        Self::error(ErrorCode::InvalidRequest, message)
    }

    fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: Vec::new(),
        }
    }

    fn asset(asset: assets::Asset) -> Self {
        Self {
            status: 200,
            content_type: asset.content_type,
            body: asset.body.as_bytes().to_vec(),
        }
    }
}

enum Route<'a> {
    Snippets,
    Snippet(String),
    Settings,
    UnknownApi,
    Shell(&'a str),
}

fn parse_route(url: &str) -> Route<'_> {
    let path = url.split(|c: char| c == '?' || c == '#').next().unwrap_or("/");
    let path = if path.is_empty() { "/" } else { path };

    match path.trim_end_matches('/') {
        "/api/snippets" => Route::Snippets,
        "/api/settings" => Route::Settings,
        api if api == "/api" || api.starts_with("/api/") => {
            match api.strip_prefix("/api/snippets/") {
                Some(raw) if !raw.is_empty() && !raw.contains('/') => {
                    match urlencoding::decode(raw) {
                        Ok(id) => Route::Snippet(id.into_owned()),
                        Err(_) => Route::UnknownApi,
                    }
                }
                _ => Route::UnknownApi,
            }
        }
        _ => Route::Shell(path),
    }
}

/// Routes one HTTP exchange. `url` is the request target, path plus optional query.
pub fn handle_http(service: &CoreService, method: &str, url: &str, body: &str) -> HttpReply {
    let method = method.to_ascii_uppercase();
    if method == "OPTIONS" {
        return HttpReply::empty(204);
    }

    let request = match (parse_route(url), method.as_str()) {
        (Route::Snippets, "GET" | "HEAD") => CoreRequest::ListSnippets,
        (Route::Snippets, "POST") => match decode::<CreateSnippetRequest>(body) {
            Ok(payload) => CoreRequest::CreateSnippet(payload),
            Err(reply) => return reply,
        },
        (Route::Snippet(id), "DELETE") => CoreRequest::DeleteSnippet { id },
        (Route::Settings, "GET" | "HEAD") => CoreRequest::GetSettings,
        (Route::Settings, "POST") => match decode::<Settings>(body) {
            Ok(settings) => CoreRequest::ReplaceSettings(settings),
            Err(reply) => return reply,
        },
        (Route::Snippets | Route::Snippet(_) | Route::Settings, _) => {
            return HttpReply::error(ErrorCode::MethodNotAllowed, "Method not allowed");
        }
        (Route::UnknownApi, _) => return HttpReply::error(ErrorCode::NotFound, "Not found"),
        (Route::Shell(path), "GET" | "HEAD") => return HttpReply::asset(assets::resolve(path)),
        (Route::Shell(_), _) => return HttpReply::error(ErrorCode::NotFound, "Not found"),
    };

    handle_request(service, request)
}

pub fn handle_request(service: &CoreService, request: CoreRequest) -> HttpReply {
    match service.handle_command(request) {
        Ok(CoreResponse::Snippets(snippets)) => HttpReply::json(200, &snippets),
        Ok(CoreResponse::Created(snippet)) => HttpReply::json(201, &snippet),
        Ok(CoreResponse::Deleted(message)) => HttpReply::json(200, &message),
        Ok(CoreResponse::Settings(settings)) => HttpReply::json(200, &settings),
        Err(error) => map_service_error(error),
    }
}

fn decode<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T, HttpReply> {
    serde_json::from_str::<T>(body)
        .map_err(|error| HttpReply::error(ErrorCode::InvalidJson, error.to_string()))
}

fn map_service_error(error: ServiceError) -> HttpReply {
    match error {
        ServiceError::Validation(message) => HttpReply::error(ErrorCode::InvalidRequest, message),
        ServiceError::NotFound(_) => HttpReply::error(ErrorCode::NotFound, "Snippet not found"),
        ServiceError::Store(error) => {
            log::error!("{error}");
            HttpReply::error(ErrorCode::Store, "Failed to save changes")
        }
    }
}
