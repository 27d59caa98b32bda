pub mod mappers;
pub mod repositories;

pub use repositories::like_repository::{DynamoLikeRepository, DynamoStoreConfig};
