pub mod like_repository;
