//! OAuth2 password-grant authentication against the MangaDex token endpoint.

use log::debug;
use log::info;
use log::warn;

use crate::config::Config;
use crate::feed::error::FeedError;
use crate::feed::model::TokenResponse;

/// Opaque bearer token, valid for the duration of one run. No refresh and no
/// expiry tracking; request a fresh one per invocation.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct Authenticator {
    client: wreq::Client,
    pub auth_url: String,
    username: Option<String>,
    password: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Authenticator {
    pub fn new(config: &Config) -> Self {
        Self {
            client: crate::feed::build_client(),
            auth_url: config.auth_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }

    /// Exchanges the configured credentials for a bearer token.
    ///
    /// Returns `None` when a credential is missing (no network call is made)
    /// or when the exchange fails; the reason is logged either way. Callers
    /// should treat `None` as terminal for the run.
    pub async fn authenticate(&self) -> Option<AccessToken> {
        match self.try_authenticate().await {
            Ok(token) => {
                info!("Authenticated against {}", self.auth_url);
                Some(token)
            }
            Err(e) => {
                warn!("Authentication failed: {e}");
                None
            }
        }
    }

    async fn try_authenticate(&self) -> Result<AccessToken, FeedError> {
        let (username, password, client_id, client_secret) = self.require_credentials()?;

        let form = [
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ];

        debug!("Requesting token from {}", self.auth_url);
        let response = self.client.post(&self.auth_url).form(&form).send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FeedError::AuthRejected { status });
        }

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(AccessToken::new(token.access_token))
    }

    fn require_credentials(&self) -> Result<(&str, &str, &str, &str), FeedError> {
        match (
            &self.username,
            &self.password,
            &self.client_id,
            &self.client_secret,
        ) {
            (Some(username), Some(password), Some(client_id), Some(client_secret)) => {
                Ok((username, password, client_id, client_secret))
            }
            _ => {
                let missing: Vec<&str> = [
                    ("MANGADEX_USERNAME", &self.username),
                    ("MANGADEX_PASSWORD", &self.password),
                    ("MANGADEX_CLIENT_ID", &self.client_id),
                    ("MANGADEX_CLIENT_SECRET", &self.client_secret),
                ]
                .iter()
                .filter(|(_, value)| value.is_none())
                .map(|(key, _)| *key)
                .collect();

                Err(FeedError::MissingCredentials {
                    fields: missing.join(", "),
                })
            }
        }
    }
}
