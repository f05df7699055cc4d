#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to parse API response: {0}")]
    JsonParseFailed(#[from] serde_json::Error),

    #[error("Missing credentials: {fields}")]
    MissingCredentials { fields: String },

    #[error("Token endpoint returned status {status}.")]
    AuthRejected { status: u16 },

    #[error("Feed endpoint returned status {status} for series {series_id}.")]
    FeedStatus { status: u16, series_id: String },
}

impl From<wreq::Error> for FeedError {
    fn from(e: wreq::Error) -> Self {
        FeedError::RequestFailed(Box::new(e))
    }
}
