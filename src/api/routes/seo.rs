use axum::{
    extract::{Query, State},
    Json,
};
use crate::api::models::{AnalyzeRequest, ShopQuery};
use crate::api::AppState;
use crate::errors::SeoError;
use crate::seo::{self, AggregateReport, FindingSet};
use crate::shopify::{validate_shop, ShopifyClient};

/// Analyze the shop's published theme.
pub async fn check(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
) -> Result<Json<AggregateReport>, SeoError> {
    validate_shop(&query.shop)?;
    let client = ShopifyClient::for_shop(&state.db, &state.settings, state.http.clone(), &query.shop)?;
    let report = seo::check_seo(&client, state.settings.fetch_concurrency).await?;
    Ok(Json(report))
}

/// Analyze markup supplied in the request body.
pub async fn analyze(Json(req): Json<AnalyzeRequest>) -> Json<FindingSet> {
    Json(seo::evaluate(&req.content, &req.asset_key))
}
