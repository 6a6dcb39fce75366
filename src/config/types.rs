use serde::{Deserialize, Serialize};

use super::credentials::mask_secret;

pub const DEFAULT_DATABASE_URL: &str = "sessions.db";
pub const DEFAULT_API_VERSION: &str = "2025-01";
pub const DEFAULT_SCOPES: &str = "read_themes,read_content,read_files";
pub const DEFAULT_FETCH_CONCURRENCY: usize = 4;
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Settings as they appear in a YAML config file. Every field is optional
/// because the environment may supply or override any of them.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SettingsFile {
    pub shopify_api_key: Option<String>,
    pub shopify_api_secret: Option<String>,
    pub app_url: Option<String>,
    pub database_url: Option<String>,
    pub api_version: Option<String>,
    pub scopes: Option<String>,
    pub shopify_base_url: Option<String>,
    pub fetch_concurrency: Option<usize>,
    pub max_retries: Option<u32>,
}

/// Resolved application settings.
#[derive(Clone, Serialize)]
pub struct Settings {
    pub shopify_api_key: String,
    #[serde(skip_serializing)]
    pub shopify_api_secret: String,
    /// Public URL of this service, used to build the OAuth redirect.
    pub app_url: String,
    /// Path of the SQLite token store.
    pub database_url: String,
    pub api_version: String,
    pub scopes: String,
    /// Replaces `https://{shop}` when talking to Shopify (proxies, tests).
    pub shopify_base_url: Option<String>,
    pub fetch_concurrency: usize,
    pub max_retries: u32,
}

impl Settings {
    /// Settings with the required credentials and defaults for everything else.
    pub fn new(api_key: &str, api_secret: &str, app_url: &str) -> Self {
        Self {
            shopify_api_key: api_key.to_string(),
            shopify_api_secret: api_secret.to_string(),
            app_url: app_url.trim_end_matches('/').to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            scopes: DEFAULT_SCOPES.to_string(),
            shopify_base_url: None,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Origin used for every request concerning `shop`.
    pub fn shop_origin(&self, shop: &str) -> String {
        match &self.shopify_base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}", shop),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("shopify_api_key", &mask_secret(&self.shopify_api_key))
            .field("shopify_api_secret", &mask_secret(&self.shopify_api_secret))
            .field("app_url", &self.app_url)
            .field("database_url", &self.database_url)
            .field("api_version", &self.api_version)
            .field("scopes", &self.scopes)
            .field("shopify_base_url", &self.shopify_base_url)
            .field("fetch_concurrency", &self.fetch_concurrency)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
