pub mod barcode;
pub mod crypto;
pub mod db;
pub mod food_scan;
pub mod health;
pub mod jwt;
pub mod lesson;
pub mod llm;
pub mod pet;
pub mod pet_health;
pub mod product_catalog;
pub mod reminder;
pub mod user;
pub mod vector_store;
