pub mod chat;
pub mod food_scan;
pub mod health;
pub mod lesson;
pub mod login;
pub mod pet;
pub mod pet_health;
pub mod progress;
pub mod query_params;
pub mod reminder;
pub mod server;
pub mod user;
pub mod utils;
