pub mod common;
pub mod like;
pub mod recipe;
