//! Runtime configuration and the static series table.

use std::collections::HashSet;
use std::path::PathBuf;

use log::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::error::AppError;
use crate::feed::MANGADEX_API_URL;
use crate::feed::MANGADEX_AUTH_URL;

#[derive(Clone, Default)]
pub struct Config {
    /// MangaDex account credentials; any missing one makes authentication
    /// fail fast without a network call.
    pub username: Option<String>,
    pub password: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub auth_url: String,
    pub api_url: String,
    /// Trailing window bounding which chapters count as "latest", in days.
    pub window_days: i64,
    /// Feed page size; only the first page is ever fetched.
    pub page_limit: u32,
    pub series_path: String,
    pub logs_path: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        Self {
            username: env_credential("MANGADEX_USERNAME"),
            password: env_credential("MANGADEX_PASSWORD"),
            client_id: env_credential("MANGADEX_CLIENT_ID"),
            client_secret: env_credential("MANGADEX_CLIENT_SECRET"),
            auth_url: std::env::var("MANGADEX_AUTH_URL")
                .unwrap_or(MANGADEX_AUTH_URL.to_string()),
            api_url: std::env::var("MANGADEX_API_URL").unwrap_or(MANGADEX_API_URL.to_string()),
            window_days: std::env::var("CHAPTER_WINDOW_DAYS")
                .unwrap_or("30".to_string())
                .parse::<i64>()
                .unwrap_or(30),
            page_limit: std::env::var("FEED_PAGE_LIMIT")
                .unwrap_or("20".to_string())
                .parse::<u32>()
                .unwrap_or(20),
            series_path: std::env::var("SERIES_PATH").unwrap_or("series.json".to_string()),
            logs_path: PathBuf::from(std::env::var("LOGS_PATH").unwrap_or("logs".to_string())),
        }
    }
}

/// An empty credential counts as missing.
fn env_credential(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// One tracked series: upstream id plus human display name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub id: String,
    pub name: String,
}

/// Static ordered mapping from series id to display name.
///
/// Table order drives the order of the grouped digest.
#[derive(Clone, Debug, Default)]
pub struct SeriesTable {
    entries: Vec<SeriesEntry>,
}

impl SeriesTable {
    /// Loads the table from a JSON array of `{id, name}` objects.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| AppError::ConfigurationError {
            msg: format!("Failed to read series table at '{path}': {e}"),
        })?;

        let entries: Vec<SeriesEntry> =
            serde_json::from_str(&raw).map_err(|e| AppError::ConfigurationError {
                msg: format!("Failed to parse series table at '{path}': {e}"),
            })?;

        Ok(Self::from_entries(entries))
    }

    /// Builds a table, keeping the first entry for any duplicated id.
    pub fn from_entries(entries: Vec<SeriesEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(entries.len());

        for entry in entries {
            if seen.insert(entry.id.clone()) {
                unique.push(entry);
            } else {
                warn!(
                    "Duplicate series id '{}' in table; keeping the first entry",
                    entry.id
                );
            }
        }

        Self { entries: unique }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
