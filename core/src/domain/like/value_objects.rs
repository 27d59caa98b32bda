use serde_json::{Map, Value};

use crate::domain::common::entities::app_errors::CoreError;

/// Persisted ingredient cap; anything past the first ten is dropped.
pub const MAX_SAVED_INGREDIENTS: usize = 10;

/// Recorded when the request does not name a source of its own.
pub const DEFAULT_SOURCE: &str = "themealdb";

/// A validated save-like request, resolved from the raw untyped body.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveLikeCommand {
    pub user_id: String,
    pub meal_id: String,
    pub meal_name: Option<String>,
    pub image_url: Option<String>,
    pub ingredients: Vec<Value>,
    pub source: String,
}

impl SaveLikeCommand {
    /// Parses and validates a raw request body.
    ///
    /// A missing or unparseable body degrades to the empty mapping and then
    /// fails on the first required field. Aliases resolve with falsy
    /// fallthrough: an empty or null value falls through to the next
    /// candidate key (`userId` then `user_id`; `meal.id` then `meal.mealId`).
    /// Validation order is fixed: `userId` is checked before `meal.id`.
    pub fn parse(raw_body: &str) -> Result<Self, CoreError> {
        let body: Value = serde_json::from_str(raw_body).unwrap_or(Value::Object(Map::new()));

        let user_id = first_present(&body, &["userId", "user_id"])
            .ok_or_else(|| CoreError::Validation("userId is required".to_string()))?;

        let empty = Value::Object(Map::new());
        let meal = body.get("meal").filter(|m| m.is_object()).unwrap_or(&empty);

        let meal_id = first_present(meal, &["id", "mealId"])
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CoreError::Validation("meal.id is required".to_string()))?;

        let ingredients = meal
            .get("ingredients")
            .and_then(Value::as_array)
            .map(|items| items.iter().take(MAX_SAVED_INGREDIENTS).cloned().collect())
            .unwrap_or_default();

        Ok(Self {
            user_id,
            meal_id,
            meal_name: first_present(meal, &["name", "mealName"]),
            image_url: first_present(meal, &["image", "imageUrl"]),
            ingredients,
            source: first_present(meal, &["source"])
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        })
    }
}

/// Resolves the first key holding a non-empty string (or a number, which is
/// stringified). Empty strings, nulls, and absent keys fall through.
fn first_present(mapping: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match mapping.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
