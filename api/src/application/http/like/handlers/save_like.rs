use axum::extract::State;
use mealswipe_core::domain::{
    like::ports::{LikeRepository, WriteOutcome},
    recipe::ports::RecipeSource,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveLikeResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/save_like",
    tag = "like",
    summary = "Record a like",
    description = "Persists at most one like per (user, meal) pair; a replay resolves as a duplicate, not an error",
    responses(
        (status = 201, body = SaveLikeResponse, description = "Like created"),
        (status = 200, body = SaveLikeResponse, description = "Like already existed"),
        (status = 400, description = "Missing required identifier"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn save_like<L, R>(
    State(state): State<AppState<L, R>>,
    // Taken raw rather than through the Json extractor: an unparseable body
    // must degrade to the empty mapping and fail validation, not be rejected
    // by the transport.
    body: String,
) -> Result<Response<SaveLikeResponse>, ApiError>
where
    L: LikeRepository,
    R: RecipeSource,
{
    let outcome = state.like_service.save_like(&body).await.map_err(|e| {
        tracing::error!("Failed to save like: {}", e);
        ApiError::from(e)
    })?;

    match outcome {
        WriteOutcome::Created => Ok(Response::Created(SaveLikeResponse {
            ok: true,
            duplicate: None,
        })),
        WriteOutcome::Duplicate => Ok(Response::OK(SaveLikeResponse {
            ok: true,
            duplicate: Some(true),
        })),
    }
}
