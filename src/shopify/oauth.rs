use std::sync::LazyLock;

use regex::Regex;
use reqwest::{Client, Url};
use serde_json::{json, Value};
use tracing::info;

use crate::config::Settings;
use crate::db::Database;
use crate::errors::SeoError;

static SHOP_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*(?::\d{1,5})?$")
        .expect("shop domain regex must compile - this is a bug")
});

/// Reject anything that is not a bare host name before it is spliced into
/// a request URL.
pub fn validate_shop(shop: &str) -> Result<(), SeoError> {
    if shop.trim().is_empty() {
        return Err(SeoError::InvalidShop("Missing 'shop' parameter".into()));
    }
    if !SHOP_DOMAIN.is_match(shop) {
        return Err(SeoError::InvalidShop(format!("'{}' is not a valid shop domain", shop)));
    }
    Ok(())
}

/// URL the merchant is sent to in order to approve the app.
pub fn install_url(settings: &Settings, shop: &str) -> Result<String, SeoError> {
    validate_shop(shop)?;

    let authorize = format!("{}/admin/oauth/authorize", settings.shop_origin(shop));
    let redirect_uri = format!("{}/auth/callback", settings.app_url);
    let url = Url::parse_with_params(
        &authorize,
        &[
            ("client_id", settings.shopify_api_key.as_str()),
            ("scope", settings.scopes.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
        ],
    )
    .map_err(|e| SeoError::InvalidShop(format!("Cannot build install URL for '{}': {}", shop, e)))?;

    Ok(url.into())
}

/// Trade the authorization code from the OAuth callback for a permanent
/// access token and store it.
pub async fn exchange_code_for_token(
    http: &Client,
    settings: &Settings,
    db: &Database,
    shop: &str,
    code: &str,
) -> Result<String, SeoError> {
    validate_shop(shop)?;
    if code.is_empty() {
        return Err(SeoError::Authentication("Missing 'code' parameter".into()));
    }

    let token_url = format!("{}/admin/oauth/access_token", settings.shop_origin(shop));
    let resp = http
        .post(&token_url)
        .json(&json!({
            "client_id": settings.shopify_api_key,
            "client_secret": settings.shopify_api_secret,
            "code": code,
        }))
        .send()
        .await?;

    let status = resp.status();
    let data: Value = resp.json().await.unwrap_or(Value::Null);

    let access_token = data["access_token"].as_str().filter(|t| !t.is_empty());
    let Some(access_token) = access_token else {
        return Err(SeoError::Authentication(format!(
            "Failed to get access token (HTTP {}): {}",
            status.as_u16(),
            data
        )));
    };

    db.save_token(shop, access_token)?;
    info!(shop, "Stored access token for shop");
    Ok(access_token.to_string())
}
