//! Upstream MangaDex interaction: authentication and chapter-feed retrieval.

pub mod auth;
pub mod chapters;
pub mod error;
pub mod model;

use wreq::Client;
use wreq::header::HeaderMap;
use wreq::header::HeaderValue;
use wreq::header::USER_AGENT;

/// Default MangaDex API base URL.
pub const MANGADEX_API_URL: &str = "https://api.mangadex.org";

/// Default MangaDex OAuth2 token endpoint (password grant).
pub const MANGADEX_AUTH_URL: &str =
    "https://auth.mangadex.org/realms/mangadex/protocol/openid-connect/token";

/// Builds the HTTP client used for all upstream calls.
///
/// See https://api.mangadex.org/docs/2-limitations/
/// "The request MUST have a User-Agent header, and it must not be spoofed"
pub(crate) fn build_client() -> Client {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("mdx-digest/0.1"));

    Client::builder()
        .default_headers(headers)
        .build()
        .expect("Failed to create client")
}
