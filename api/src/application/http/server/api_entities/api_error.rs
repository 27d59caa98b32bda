use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use mealswipe_core::domain::common::entities::app_errors::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Transport-level error. Each variant owns its wire contract: the recipe
/// endpoint reports `{"error": ...}`, the like endpoint reports
/// `{"ok": false, "error": ...}`.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Recipe source unreachable or malformed payload; 500.
    #[error("{0}")]
    UpstreamFetch(String),

    /// Request failed validation; 400 with the field-level message.
    #[error("{0}")]
    Validation(String),

    /// Store-layer failure (throttling, connectivity, permission); 500.
    #[error("{0}")]
    Store(String),
}

#[derive(Debug, Serialize)]
struct RecipeErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct LikeErrorBody {
    ok: bool,
    error: String,
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Upstream(message) => ApiError::UpstreamFetch(message),
            CoreError::Validation(message) => ApiError::Validation(message),
            CoreError::Store(message) => ApiError::Store(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::UpstreamFetch(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RecipeErrorBody { error }),
            )
                .into_response(),
            ApiError::Validation(error) => (
                StatusCode::BAD_REQUEST,
                Json(LikeErrorBody { ok: false, error }),
            )
                .into_response(),
            ApiError::Store(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LikeErrorBody { ok: false, error }),
            )
                .into_response(),
        }
    }
}
