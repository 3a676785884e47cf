pub mod discord;
pub mod health;
