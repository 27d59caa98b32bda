pub mod mealdb_client;

pub use mealdb_client::MealDbClient;
