use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// TheMealDB exposes ingredients as this many numbered field pairs.
pub const INGREDIENT_SLOTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub image: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Normalizes a raw `random.php` payload into a `Recipe`.
    ///
    /// The source record is `meals[0]` with flat fields
    /// `strIngredient{1..=20}` / `strMeasure{1..=20}`. A pair is kept, in
    /// ascending index order, only when the ingredient name is non-blank
    /// after trimming; its measure is carried through even when null.
    pub fn from_meal_db(payload: &Value) -> Result<Self, CoreError> {
        let meal = payload
            .get("meals")
            .and_then(Value::as_array)
            .and_then(|meals| meals.first())
            .ok_or_else(|| CoreError::Upstream("missing meals[0] in recipe payload".to_string()))?;

        let field = |name: &str| {
            meal.get(name)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| CoreError::Upstream(format!("missing {name} in recipe payload")))
        };

        let mut ingredients = Vec::new();
        for i in 1..=INGREDIENT_SLOTS {
            let name = meal
                .get(format!("strIngredient{i}").as_str())
                .and_then(Value::as_str)
                .unwrap_or_default();
            if name.trim().is_empty() {
                continue;
            }
            let measure = meal
                .get(format!("strMeasure{i}").as_str())
                .and_then(Value::as_str)
                .map(str::to_owned);
            ingredients.push(Ingredient {
                name: name.to_owned(),
                measure,
            });
        }

        Ok(Self {
            id: field("idMeal")?,
            name: field("strMeal")?,
            image: field("strMealThumb")?,
            instructions: field("strInstructions")?,
            ingredients,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(meal: Value) -> Value {
        json!({ "meals": [meal] })
    }

    fn base_meal() -> Value {
        json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strInstructions": "Preheat oven to 350F.",
        })
    }

    #[test]
    fn test_normalizes_top_level_fields() {
        let recipe = Recipe::from_meal_db(&payload(base_meal())).unwrap();
        assert_eq!(recipe.id, "52772");
        assert_eq!(recipe.name, "Teriyaki Chicken Casserole");
        assert_eq!(
            recipe.image,
            "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg"
        );
        assert_eq!(recipe.instructions, "Preheat oven to 350F.");
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_keeps_ingredients_in_ascending_slot_order() {
        let mut meal = base_meal();
        meal["strIngredient1"] = json!("soy sauce");
        meal["strMeasure1"] = json!("3/4 cup");
        meal["strIngredient2"] = json!("water");
        meal["strMeasure2"] = json!("1/2 cup");
        meal["strIngredient10"] = json!("sesame seeds");
        meal["strMeasure10"] = json!("1 tbsp");

        let recipe = Recipe::from_meal_db(&payload(meal)).unwrap();
        let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["soy sauce", "water", "sesame seeds"]);
        assert_eq!(recipe.ingredients[0].measure.as_deref(), Some("3/4 cup"));
    }

    #[test]
    fn test_blank_ingredient_excluded_even_with_measure() {
        let mut meal = base_meal();
        meal["strIngredient1"] = json!("   ");
        meal["strMeasure1"] = json!("2 tsp");
        meal["strIngredient2"] = json!("");
        meal["strIngredient3"] = json!(Value::Null);
        meal["strMeasure3"] = json!("1 cup");
        meal["strIngredient4"] = json!("garlic");

        let recipe = Recipe::from_meal_db(&payload(meal)).unwrap();
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "garlic");
    }

    #[test]
    fn test_null_measure_carried_through() {
        let mut meal = base_meal();
        meal["strIngredient1"] = json!("salt");
        meal["strMeasure1"] = json!(Value::Null);

        let recipe = Recipe::from_meal_db(&payload(meal)).unwrap();
        assert_eq!(recipe.ingredients[0].name, "salt");
        assert_eq!(recipe.ingredients[0].measure, None);
    }

    #[test]
    fn test_ingredient_name_not_trimmed_in_output() {
        let mut meal = base_meal();
        meal["strIngredient1"] = json!(" butter ");

        let recipe = Recipe::from_meal_db(&payload(meal)).unwrap();
        assert_eq!(recipe.ingredients[0].name, " butter ");
    }

    #[test]
    fn test_missing_meals_array_is_upstream_error() {
        let err = Recipe::from_meal_db(&json!({})).unwrap_err();
        assert!(matches!(err, CoreError::Upstream(_)));
    }

    #[test]
    fn test_empty_meals_array_is_upstream_error() {
        let err = Recipe::from_meal_db(&json!({ "meals": [] })).unwrap_err();
        assert!(matches!(err, CoreError::Upstream(_)));
    }

    #[test]
    fn test_missing_required_field_is_upstream_error() {
        let mut meal = base_meal();
        meal.as_object_mut().unwrap().remove("strInstructions");
        let err = Recipe::from_meal_db(&payload(meal)).unwrap_err();
        assert!(matches!(err, CoreError::Upstream(ref m) if m.contains("strInstructions")));
    }
}
