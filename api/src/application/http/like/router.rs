use axum::http::Method;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::{Router, routing::post};
use mealswipe_core::domain::{like::ports::LikeRepository, recipe::ports::RecipeSource};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use super::handlers::save_like::{__path_save_like, save_like};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(save_like))]
pub struct LikeApiDoc;

pub fn like_routes<L, R>(state: AppState<L, R>) -> Router<AppState<L, R>>
where
    L: LikeRepository + 'static,
    R: RecipeSource + 'static,
{
    // Dev CORS: any origin, but only the method and headers this endpoint
    // actually takes.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::OPTIONS, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route(
            &format!("{}/save_like", state.args.server.root_path),
            post(save_like),
        )
        .layer(cors)
}
