pub mod create_pet;
pub mod delete_pet;
pub mod get_pet;
pub mod get_pets;
pub mod update_pet;
