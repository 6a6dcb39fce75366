use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ShopQuery {
    #[serde(default)]
    pub shop: String,
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    #[serde(default)]
    pub shop: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Deserialize)]
pub struct AssetQuery {
    #[serde(default)]
    pub shop: String,
    pub theme_id: String,
    pub asset_key: String,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub asset_key: String,
    pub content: String,
}

#[derive(Serialize)]
pub struct AuthCallbackResponse {
    pub message: String,
    pub shop: String,
}

#[derive(Serialize)]
pub struct ThemeAssetResponse {
    pub asset_key: String,
    pub content: String,
}
