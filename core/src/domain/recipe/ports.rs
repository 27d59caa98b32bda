use std::future::Future;

use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for the external recipe source (TheMealDB).
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSource: Send + Sync {
    /// Fetches one randomized raw recipe payload. Exactly one outbound call
    /// per invocation; failures are terminal, never retried here.
    fn fetch_random(&self) -> impl Future<Output = Result<Value, CoreError>> + Send;
}
