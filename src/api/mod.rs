pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use std::time::Duration;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use crate::config::Settings;
use crate::db::Database;
use crate::errors::SeoError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub settings: Arc<Settings>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(db: Database, settings: Settings) -> Result<Self, SeoError> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(concat!("shopify-seo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SeoError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(db, settings, http))
    }

    pub fn with_client(db: Database, settings: Settings, http: reqwest::Client) -> Self {
        Self { db, settings: Arc::new(settings), http }
    }
}

pub async fn create_app_state(settings: Settings) -> Result<AppState, SeoError> {
    let db = Database::new(&settings.database_url)?;
    AppState::new(db, settings)
}

pub fn build_router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/auth/install", get(routes::auth::install))
        .route("/auth/callback", get(routes::auth::callback))
        .route("/themes", get(routes::themes::list_themes))
        .route("/themes/asset", get(routes::themes::get_asset))
        .route("/seo/check", get(routes::seo::check))
        .route("/seo/analyze", post(routes::seo::analyze));

    Router::new()
        .route("/", get(routes::health::root))
        .route("/api/health", get(routes::health::health_check))
        .nest("/api/v1", v1)
        // Paths served before the versioned API existed
        .route("/install", get(routes::auth::install))
        .route("/auth/callback", get(routes::auth::callback))
        .route("/themes", get(routes::themes::list_themes))
        .route("/theme-asset", get(routes::themes::get_asset))
        .route("/seo-check", get(routes::seo::check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
