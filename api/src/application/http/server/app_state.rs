use std::sync::Arc;

use mealswipe_core::domain::{
    like::{ports::LikeRepository, services::LikeService},
    recipe::{ports::RecipeSource, services::RecipeService},
};

use crate::args::Args;

/// Shared handler state. Collaborators are injected at construction and
/// reused across invocations; tests substitute in-memory fakes.
pub struct AppState<L, R> {
    pub args: Arc<Args>,
    pub like_service: Arc<LikeService<L>>,
    pub recipe_service: Arc<RecipeService<R>>,
}

impl<L, R> Clone for AppState<L, R> {
    fn clone(&self) -> Self {
        Self {
            args: self.args.clone(),
            like_service: self.like_service.clone(),
            recipe_service: self.recipe_service.clone(),
        }
    }
}

impl<L: LikeRepository, R: RecipeSource> AppState<L, R> {
    pub fn new(
        args: Arc<Args>,
        like_service: LikeService<L>,
        recipe_service: RecipeService<R>,
    ) -> Self {
        Self {
            args,
            like_service: Arc::new(like_service),
            recipe_service: Arc::new(recipe_service),
        }
    }
}
