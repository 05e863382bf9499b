pub mod food_scan_repository;
