//! Wire records for the MangaDex token and chapter-feed endpoints.
//!
//! Fields the pipeline does not consume are left out; serde ignores them.
//! Every optional field carries an explicit default so a missing, null, or
//! empty value never fails deserialization.

use serde::Deserialize;
use serde::Serialize;

/// One published chapter as returned by `GET /manga/{id}/feed`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub attributes: ChapterAttributes,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterAttributes {
    /// Chapter number as upstream sends it; may be absent, empty, or
    /// non-numeric (e.g. "Extra").
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// ISO-8601 publish timestamp.
    #[serde(default)]
    pub publish_at: String,
    #[serde(default)]
    pub external_url: Option<String>,
}

/// Typed reference embedded in a chapter record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: String,
}

impl Chapter {
    /// Owning series id: the first relationship of type `manga`.
    pub fn series_id(&self) -> Option<&str> {
        self.relationships
            .iter()
            .find(|rel| rel.kind == "manga")
            .map(|rel| rel.id.as_str())
    }

    /// Numeric sort key; a missing, empty, or non-numeric chapter number
    /// counts as 0.
    pub fn number_key(&self) -> f64 {
        self.attributes
            .chapter
            .as_deref()
            .unwrap_or("")
            .trim()
            .parse()
            .unwrap_or(0.0)
    }

    /// Publish year from the leading `YYYY` of `publishAt`, if readable.
    pub fn publish_year(&self) -> Option<i32> {
        self.attributes.publish_at.get(..4)?.parse().ok()
    }
}

/// Envelope of `GET /manga/{id}/feed`.
#[derive(Debug, Default, Deserialize)]
pub struct ChapterFeedResponse {
    #[serde(default)]
    pub data: Vec<Chapter>,
}

/// Success body of the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
