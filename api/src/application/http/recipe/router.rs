use axum::{Router, routing::get};
use mealswipe_core::domain::{like::ports::LikeRepository, recipe::ports::RecipeSource};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use super::handlers::get_random_recipe::{__path_get_random_recipe, get_random_recipe};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_random_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes<L, R>(state: AppState<L, R>) -> Router<AppState<L, R>>
where
    L: LikeRepository + 'static,
    R: RecipeSource + 'static,
{
    // Dev CORS: any origin, any headers.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            &format!("{}/get_recipe", state.args.server.root_path),
            get(get_random_recipe),
        )
        .layer(cors)
}
