use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::db::Database;
use crate::errors::{with_retry, RetryConfig, SeoError};
use super::source::ThemeSource;
use super::types::{AssetInfo, ThemeSummary};

pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Shopify Admin REST API client bound to one authenticated shop.
pub struct ShopifyClient {
    http: Client,
    shop: String,
    access_token: String,
    api_base: String,
    retry: RetryConfig,
}

impl ShopifyClient {
    pub fn new(http: Client, settings: &Settings, shop: &str, access_token: &str) -> Self {
        Self {
            http,
            shop: shop.to_string(),
            access_token: access_token.to_string(),
            api_base: format!("{}/admin/api/{}", settings.shop_origin(shop), settings.api_version),
            retry: RetryConfig { max_retries: settings.max_retries },
        }
    }

    /// Build a client from the stored token for `shop`.
    pub fn for_shop(db: &Database, settings: &Settings, http: Client, shop: &str) -> Result<Self, SeoError> {
        let token = db
            .get_token(shop)?
            .ok_or_else(|| SeoError::Authentication(format!("Shop {} not authenticated", shop)))?;
        Ok(Self::new(http, settings, shop, &token))
    }

    /// GET a path under the versioned Admin API. Rate limiting and server
    /// errors are retried; any other status is handed back to the caller.
    async fn get(&self, operation: &str, path: &str, query: &[(&str, &str)]) -> Result<Response, SeoError> {
        let url = format!("{}/{}", self.api_base, path);

        with_retry(operation, &self.retry, || {
            let request = self
                .http
                .get(&url)
                .header(ACCESS_TOKEN_HEADER, &self.access_token)
                .header(CONTENT_TYPE, "application/json")
                .query(query);
            let shop = self.shop.clone();

            async move {
                let resp = request.send().await?;
                let status = resp.status();
                if status == StatusCode::TOO_MANY_REQUESTS {
                    return Err(SeoError::RateLimit(format!("Shopify rate limit hit for {}", shop)));
                }
                if status.is_server_error() {
                    let message = resp.text().await.unwrap_or_default();
                    return Err(SeoError::Upstream { status: status.as_u16(), message });
                }
                Ok(resp)
            }
        })
        .await
    }

    /// Raw theme listing as returned by Shopify.
    pub async fn get_themes(&self) -> Result<Value, SeoError> {
        let resp = self.get("get_themes", "themes.json", &[]).await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(SeoError::Authentication(format!(
                "Shopify rejected the access token for {}",
                self.shop
            )));
        }
        if status != StatusCode::OK {
            let message = resp.text().await.unwrap_or_default();
            return Err(SeoError::Upstream { status: status.as_u16(), message });
        }

        Ok(resp.json().await?)
    }
}

/// Collapse exhausted retries into the "not retrievable" outcome the asset
/// endpoints report for any non-success status.
fn unavailable<T>(operation: &str, shop: &str, err: SeoError, fallback: T) -> Result<T, SeoError> {
    match err {
        SeoError::RateLimit(_) | SeoError::Upstream { .. } => {
            warn!(operation, shop, error = %err, "Shopify request failed, treating as unavailable");
            Ok(fallback)
        }
        other => Err(other),
    }
}

#[async_trait]
impl ThemeSource for ShopifyClient {
    fn shop(&self) -> &str {
        &self.shop
    }

    async fn get_active_theme_id(&self) -> Result<Option<String>, SeoError> {
        let listing = self.get_themes().await?;
        let active = ThemeSummary::from_listing(&listing)
            .into_iter()
            .find(ThemeSummary::is_main)
            .map(|theme| theme.id);
        debug!(shop = %self.shop, theme_id = ?active, "Resolved active theme");
        Ok(active)
    }

    async fn list_theme_assets(&self, theme_id: &str) -> Result<Vec<AssetInfo>, SeoError> {
        let path = format!("themes/{}/assets.json", theme_id);
        let resp = match self.get("list_theme_assets", &path, &[]).await {
            Ok(resp) => resp,
            Err(e) => return unavailable("list_theme_assets", &self.shop, e, Vec::new()),
        };

        if resp.status() != StatusCode::OK {
            debug!(shop = %self.shop, theme_id, status = resp.status().as_u16(), "Asset listing unavailable");
            return Ok(Vec::new());
        }

        let data: Value = resp.json().await?;
        let entries: Vec<Value> = match data.get("assets") {
            Some(assets) => serde_json::from_value(assets.clone())?,
            None => Vec::new(),
        };

        let assets = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<AssetInfo>(entry) {
                Ok(asset) => Some(asset),
                Err(e) => {
                    debug!(shop = %self.shop, theme_id, error = %e, "Skipping malformed asset entry");
                    None
                }
            })
            .collect();
        Ok(assets)
    }

    async fn get_theme_asset(&self, theme_id: &str, asset_key: &str) -> Result<Option<String>, SeoError> {
        let path = format!("themes/{}/assets.json", theme_id);
        let resp = match self.get("get_theme_asset", &path, &[("asset[key]", asset_key)]).await {
            Ok(resp) => resp,
            Err(e) => return unavailable("get_theme_asset", &self.shop, e, None),
        };

        if resp.status() != StatusCode::OK {
            debug!(shop = %self.shop, theme_id, asset_key, status = resp.status().as_u16(), "Asset unavailable");
            return Ok(None);
        }

        let data: Value = resp.json().await?;
        Ok(data["asset"]["value"].as_str().map(str::to_string))
    }
}
