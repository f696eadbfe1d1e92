use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snippet {
    pub id: String,
    pub command: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Snippet {
    pub fn new(id: &str, command: &str, keywords: &[&str], description: &str) -> Self {
        Self {
            id: id.to_string(),
            command: command.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            description: description.to_string(),
        }
    }

    /// Lowercased `command description keywords...`, joined with single spaces.
    pub fn haystack(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.keywords.len() + 2);
        parts.push(&self.command);
        parts.push(&self.description);
        parts.extend(self.keywords.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

/// Keywords as they arrive on the wire: a list, or one comma-separated string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum KeywordsInput {
    List(Vec<String>),
    Csv(String),
}

impl KeywordsInput {
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Self::List(items) => clean_keywords(items.iter().map(String::as_str)),
            Self::Csv(raw) => clean_keywords(raw.split(',')),
        }
    }
}

fn clean_keywords<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Hands out millisecond-timestamp ids. When the clock has not advanced since the
/// previous id (or went backwards), the last value is bumped so ids never repeat.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    pub fn next_id(&self) -> String {
        let now = now_millis();
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(previous + 1);
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => previous = actual,
            }
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
