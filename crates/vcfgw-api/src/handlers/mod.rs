pub mod health;
pub mod listing;
pub mod upload;
