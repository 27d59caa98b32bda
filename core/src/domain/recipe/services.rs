use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, ports::RecipeSource},
};

/// Fetches a random recipe from the configured source and normalizes it.
#[derive(Debug, Clone)]
pub struct RecipeService<S> {
    source: S,
}

impl<S: RecipeSource> RecipeService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn random_recipe(&self) -> Result<Recipe, CoreError> {
        let payload = self.source.fetch_random().await?;
        Recipe::from_meal_db(&payload)
    }
}
