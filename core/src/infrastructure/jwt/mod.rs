pub mod jwt_repository;
