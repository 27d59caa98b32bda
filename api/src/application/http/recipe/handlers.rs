pub mod get_random_recipe;
