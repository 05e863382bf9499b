pub mod entities;
pub mod ports;
pub mod prompts;
pub mod scoring;
pub mod services;
pub mod value_objects;
