use crate::cli::commands::ServeArgs;
use crate::errors::SeoError;
use crate::{api, config};
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), SeoError> {
    let settings = config::load_settings(args.config.as_deref()).await?;
    info!(host = %args.host, port = args.port, db = %settings.database_url, "Starting API server");

    let state = api::create_app_state(settings).await?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| SeoError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
