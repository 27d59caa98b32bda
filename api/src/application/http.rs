pub mod health;
pub mod like;
pub mod recipe;
pub mod server;
