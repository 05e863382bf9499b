pub mod ports;
pub mod value_objects;
pub mod recovery;
