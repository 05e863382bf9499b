pub mod authentication;
pub mod barcode;
pub mod chat;
pub mod common;
pub mod crypto;
pub mod food_scan;
pub mod health;
pub mod jwt;
pub mod lesson;
pub mod llm;
pub mod pet;
pub mod pet_health;
pub mod reminder;
pub mod user;
