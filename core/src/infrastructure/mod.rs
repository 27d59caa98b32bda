pub mod like;
pub mod recipe;
