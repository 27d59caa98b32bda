pub mod save_like;
