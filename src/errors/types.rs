use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Authentication(String),

    #[error("Invalid shop: {0}")]
    InvalidShop(String),

    #[error("{0}")]
    NotFound(String),

    /// Non-success reply from the Shopify Admin API.
    #[error("Shopify API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for SeoError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SeoError::Timeout(e.to_string())
        } else {
            SeoError::Network(e.to_string())
        }
    }
}
