use reqwest::Client;
use serde_json::Value;

use crate::domain::{common::entities::app_errors::CoreError, recipe::ports::RecipeSource};

pub const DEFAULT_MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// HTTP client for TheMealDB.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    base_url: String,
    client: Client,
}

impl MealDbClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn random_url(&self) -> String {
        format!("{}/random.php", self.base_url)
    }
}

impl RecipeSource for MealDbClient {
    async fn fetch_random(&self) -> Result<Value, CoreError> {
        let response = self
            .client
            .get(self.random_url())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Recipe source request failed: {}", e);
                CoreError::Upstream(format!("recipe source request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Recipe source returned error status: {}", status);
            return Err(CoreError::Upstream(format!(
                "recipe source returned status {status}"
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse recipe source payload: {}", e);
            CoreError::Upstream(format!("failed to parse recipe payload: {e}"))
        })
    }
}
