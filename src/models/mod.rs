pub mod discord;
pub mod health;
pub mod profile;
pub mod response;
pub mod submission;
pub mod validation;
