pub mod analyze_food_image;
pub mod health_check;
pub mod scan_barcode;
