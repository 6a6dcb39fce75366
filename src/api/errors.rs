use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;
use crate::errors::SeoError;

impl SeoError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SeoError::Config(_) | SeoError::InvalidShop(_) => StatusCode::BAD_REQUEST,
            SeoError::Authentication(_) => StatusCode::UNAUTHORIZED,
            SeoError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SeoError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, error_type = self.classify().error_type, "Request failed");
        }

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
