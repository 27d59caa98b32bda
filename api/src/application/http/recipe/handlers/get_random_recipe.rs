use axum::extract::State;
use mealswipe_core::domain::{
    like::ports::LikeRepository,
    recipe::{entities::Recipe, ports::RecipeSource},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/get_recipe",
    tag = "recipe",
    summary = "Fetch a random recipe",
    description = "Fetches one random recipe from the upstream source and normalizes its ingredient list",
    responses(
        (status = 200, body = Recipe, description = "A normalized random recipe"),
        (status = 500, description = "Upstream source unreachable or malformed payload")
    )
)]
pub async fn get_random_recipe<L, R>(
    State(state): State<AppState<L, R>>,
) -> Result<Response<Recipe>, ApiError>
where
    L: LikeRepository,
    R: RecipeSource,
{
    let recipe = state.recipe_service.random_recipe().await.map_err(|e| {
        tracing::error!("Failed to fetch random recipe: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(recipe))
}
