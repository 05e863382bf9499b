use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::{
        entities::{AccessToken, JwtClaim},
        ports::TokenRepository,
    },
};

/// HS256 access tokens whose `sub` is the user id.
#[derive(Clone)]
pub struct JwtTokenRepository {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expire_minutes: i64,
}

impl JwtTokenRepository {
    pub fn new(secret: String, access_token_expire_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expire_minutes,
        }
    }
}

impl TokenRepository for JwtTokenRepository {
    fn generate_access_token(&self, user_id: Uuid) -> Result<AccessToken, CoreError> {
        let now = Utc::now();
        let claims = JwtClaim {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.access_token_expire_minutes)).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign access token: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(AccessToken::bearer(token))
    }

    fn verify_access_token(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaim>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected access token: {}", e);
                CoreError::InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_to_the_same_subject() {
        let repository = JwtTokenRepository::new("secret".to_string(), 30);
        let user_id = Uuid::new_v4();

        let token = repository.generate_access_token(user_id).unwrap();
        let claims = repository.verify_access_token(&token.access_token).unwrap();

        assert_eq!(token.token_type, "bearer");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let issuer = JwtTokenRepository::new("one".to_string(), 30);
        let verifier = JwtTokenRepository::new("two".to_string(), 30);
        let token = issuer.generate_access_token(Uuid::new_v4()).unwrap();

        assert_eq!(
            verifier.verify_access_token(&token.access_token),
            Err(CoreError::InvalidToken)
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let repository = JwtTokenRepository::new("secret".to_string(), -10);
        let token = repository.generate_access_token(Uuid::new_v4()).unwrap();

        assert_eq!(
            repository.verify_access_token(&token.access_token),
            Err(CoreError::InvalidToken)
        );
    }
}
