use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::SeoError;
use super::credentials::resolve_credential;
use super::types::*;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

/// Load settings for the running process: `.env` first, then the optional
/// YAML file, with process environment variables taking precedence.
pub async fn load_settings(path: Option<&Path>) -> Result<Settings, SeoError> {
    match dotenvy::dotenv() {
        Ok(env_path) => info!(path = %env_path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!(error = %e, "Failed to read .env file"),
    }

    load_settings_with(path, &|name: &str| std::env::var(name).ok()).await
}

/// Same as [`load_settings`] but reads variables through `lookup` and skips
/// `.env` discovery.
pub async fn load_settings_with(
    path: Option<&Path>,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<Settings, SeoError> {
    let mut file = match path {
        Some(path) => read_settings_file(path).await?,
        None => SettingsFile::default(),
    };

    apply_env(&mut file, lookup)?;
    resolve(file, lookup)
}

async fn read_settings_file(path: &Path) -> Result<SettingsFile, SeoError> {
    if !path.exists() {
        return Err(SeoError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(SeoError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }
    Ok(serde_yaml::from_str(&content)?)
}

fn apply_env(file: &mut SettingsFile, lookup: &dyn Fn(&str) -> Option<String>) -> Result<(), SeoError> {
    let strings = [
        ("SHOPIFY_API_KEY", &mut file.shopify_api_key),
        ("SHOPIFY_API_SECRET", &mut file.shopify_api_secret),
        ("APP_URL", &mut file.app_url),
        ("DATABASE_URL", &mut file.database_url),
        ("SHOPIFY_API_VERSION", &mut file.api_version),
        ("SHOPIFY_SCOPES", &mut file.scopes),
        ("SHOPIFY_BASE_URL", &mut file.shopify_base_url),
    ];
    for (var, slot) in strings {
        if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
            *slot = Some(value);
        }
    }

    if let Some(value) = lookup("FETCH_CONCURRENCY") {
        file.fetch_concurrency = Some(parse_number("FETCH_CONCURRENCY", &value)?);
    }
    if let Some(value) = lookup("MAX_RETRIES") {
        file.max_retries = Some(parse_number("MAX_RETRIES", &value)?);
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, SeoError> {
    value
        .trim()
        .parse()
        .map_err(|_| SeoError::Config(format!("{} must be a non-negative integer, got '{}'", var, value)))
}

fn resolve(file: SettingsFile, lookup: &dyn Fn(&str) -> Option<String>) -> Result<Settings, SeoError> {
    let required = |value: Option<String>, name: &str| -> Result<String, SeoError> {
        value
            .map(|v| resolve_credential(&v, lookup))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| SeoError::Config(format!("Missing required setting: {}", name)))
    };

    let mut settings = Settings::new(
        &required(file.shopify_api_key, "shopify_api_key")?,
        &required(file.shopify_api_secret, "shopify_api_secret")?,
        &required(file.app_url, "app_url")?,
    );

    if let Some(database_url) = file.database_url {
        settings.database_url = database_url;
    }
    if let Some(api_version) = file.api_version {
        settings.api_version = api_version;
    }
    if let Some(scopes) = file.scopes {
        settings.scopes = scopes;
    }
    settings.shopify_base_url = file.shopify_base_url;
    if let Some(concurrency) = file.fetch_concurrency {
        if concurrency == 0 {
            return Err(SeoError::Config("fetch_concurrency must be at least 1".into()));
        }
        settings.fetch_concurrency = concurrency;
    }
    if let Some(max_retries) = file.max_retries {
        settings.max_retries = max_retries;
    }

    Ok(settings)
}
