use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use mealswipe_core::{
    domain::{
        like::{ports::LikeRepository, services::LikeService},
        recipe::{ports::RecipeSource, services::RecipeService},
    },
    infrastructure::{
        like::{DynamoLikeRepository, DynamoStoreConfig},
        recipe::MealDbClient,
    },
};
use tracing::info_span;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::health::health_routes;
use crate::application::http::like::router::like_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub type DynamoAppState = AppState<DynamoLikeRepository, MealDbClient>;

pub async fn state(args: Arc<Args>) -> Result<DynamoAppState, anyhow::Error> {
    let repository = DynamoLikeRepository::from_env(DynamoStoreConfig {
        table_name: args.store.table_name.clone(),
        endpoint: args.store.dynamodb_endpoint.clone(),
    })
    .await;
    let source = MealDbClient::new(args.recipe.mealdb_base_url.clone());

    Ok(AppState::new(
        args,
        LikeService::new(repository),
        RecipeService::new(source),
    ))
}

///  Returns the [`Router`] of this application.
pub fn router<L, R>(state: AppState<L, R>) -> Result<Router, anyhow::Error>
where
    L: LikeRepository + 'static,
    R: RecipeSource + 'static,
{
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::merged();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = axum::Router::new()
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(api_docs_url, openapi))
        .merge(recipe_routes(state.clone()))
        .merge(like_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}
