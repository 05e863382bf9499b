pub mod open_pet_food_facts;
