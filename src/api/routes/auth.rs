use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde_json::{json, Value};
use tracing::info;
use crate::api::models::{AuthCallbackResponse, CallbackQuery, ShopQuery};
use crate::api::AppState;
use crate::errors::SeoError;
use crate::shopify;

/// Start the OAuth flow by sending the merchant to Shopify's consent page.
pub async fn install(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
) -> Result<Redirect, SeoError> {
    let url = shopify::install_url(&state.settings, &query.shop)?;
    info!(shop = %query.shop, "Redirecting to Shopify install page");
    Ok(Redirect::temporary(&url))
}

/// OAuth callback: exchange the code for an access token.
pub async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Json<AuthCallbackResponse>, (StatusCode, Json<Value>)> {
    match shopify::exchange_code_for_token(&state.http, &state.settings, &state.db, &query.shop, &query.code).await {
        Ok(_) => Ok(Json(AuthCallbackResponse {
            message: "App installed!".to_string(),
            shop: query.shop,
        })),
        // A failed handshake is the caller's problem, not an auth failure of this API
        Err(e @ (SeoError::Authentication(_) | SeoError::InvalidShop(_))) => {
            Err((StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()}))))
        }
        Err(e) => Err((e.status_code(), Json(json!({"error": e.to_string()})))),
    }
}
