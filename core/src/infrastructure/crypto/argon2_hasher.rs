use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

/// Argon2id with the crate's default parameters, stored as PHC strings.
#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2HasherRepository {
    fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!("Failed to hash password: {}", e);
                CoreError::InternalServerError
            })
    }

    fn verify_password(&self, password: &str, hashed_password: &str) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(hashed_password).map_err(|e| {
            error!("Stored password hash is malformed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_verify_only_the_original_password() {
        let hasher = Argon2HasherRepository::new();
        let hash = hasher.hash_password("s3cret-pass").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("s3cret-pass", &hash).unwrap());
        assert!(!hasher.verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let hasher = Argon2HasherRepository::new();
        assert!(hasher.verify_password("x", "plain-text").is_err());
    }
}
