use utoipa::OpenApi;

use crate::application::http::{
    health::HealthApiDoc, like::router::LikeApiDoc, recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "mealswipe API", description = "Recipe discovery backend"),
    tags(
        (name = "recipe", description = "Random recipe lookup"),
        (name = "like", description = "Idempotent like recording"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every router's paths merged in.
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut doc = <Self as OpenApi>::openapi();
        doc.merge(RecipeApiDoc::openapi());
        doc.merge(LikeApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
