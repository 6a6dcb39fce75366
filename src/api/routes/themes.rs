use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use crate::api::models::{AssetQuery, ShopQuery, ThemeAssetResponse};
use crate::api::AppState;
use crate::errors::SeoError;
use crate::shopify::{validate_shop, ShopifyClient, ThemeSource};

fn client_for(state: &AppState, shop: &str) -> Result<ShopifyClient, SeoError> {
    validate_shop(shop)?;
    ShopifyClient::for_shop(&state.db, &state.settings, state.http.clone(), shop)
}

pub async fn list_themes(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
) -> Result<Json<Value>, SeoError> {
    let client = client_for(&state, &query.shop)?;
    Ok(Json(client.get_themes().await?))
}

pub async fn get_asset(
    State(state): State<AppState>,
    Query(query): Query<AssetQuery>,
) -> Result<Json<ThemeAssetResponse>, SeoError> {
    let client = client_for(&state, &query.shop)?;
    let content = client
        .get_theme_asset(&query.theme_id, &query.asset_key)
        .await?
        .ok_or_else(|| {
            SeoError::NotFound(format!(
                "Asset '{}' not found or could not be retrieved",
                query.asset_key
            ))
        })?;

    Ok(Json(ThemeAssetResponse { asset_key: query.asset_key, content }))
}
