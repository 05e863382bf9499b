pub mod get_pet_food_scan;
pub mod get_pet_food_scans;
