use tracing::debug;

use crate::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{AuthorizeRequestInput, Identity, LoginInput},
    },
    barcode::ports::{BarcodeDecoder, ProductCatalog},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    food_scan::ports::FoodScanResultRepository,
    health::ports::HealthCheckRepository,
    jwt::{entities::AccessToken, ports::TokenRepository},
    lesson::ports::{LessonRepository, ProgressLessonRepository},
    llm::ports::{LLMClient, VectorStore},
    pet::ports::PetRepository,
    pet_health::ports::{
        AllergyRepository, InsuranceRepository, MedicalConditionRepository, MedicationRepository,
        VaccinationRepository,
    },
    reminder::ports::ReminderRepository,
    user::ports::UserRepository,
};

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> AuthService
    for Service<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC>
where
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
    P: PetRepository,
    RM: ReminderRepository,
    VA: VaccinationRepository,
    AL: AllergyRepository,
    IN: InsuranceRepository,
    MC: MedicalConditionRepository,
    MD: MedicationRepository,
    LS: LessonRepository,
    PL: ProgressLessonRepository,
    FS: FoodScanResultRepository,
    LLM: LLMClient,
    VS: VectorStore,
    PC: ProductCatalog,
    BD: BarcodeDecoder,
    HC: HealthCheckRepository,
{
    async fn login(&self, input: LoginInput) -> Result<AccessToken, CoreError> {
        let user = self
            .user_repository
            .get_user_by_email(input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let verified = self
            .hasher_repository
            .verify_password(&input.password, &user.hashed_password)?;
        if !verified {
            return Err(CoreError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(CoreError::InactiveUser);
        }

        self.token_repository.generate_access_token(user.id)
    }

    async fn authorize_request(&self, input: AuthorizeRequestInput) -> Result<Identity, CoreError> {
        let claims = self.token_repository.verify_access_token(&input.token)?;

        let user = self
            .user_repository
            .get_user_by_id(claims.sub)
            .await?
            .ok_or_else(|| {
                debug!("token subject {} no longer exists", claims.sub);
                CoreError::not_found("User")
            })?;

        if !user.is_active {
            return Err(CoreError::InactiveUser);
        }

        Ok(Identity::new(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::user::{ports::UserService, value_objects::RegisterUserInput},
        test_support::TestContext,
    };

    async fn register(ctx: &TestContext) {
        ctx.service
            .register_user(RegisterUserInput {
                email: "mia@example.com".to_string(),
                password: "hunter22".to_string(),
                name: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn login_then_authorize_round_trips_to_the_same_user() {
        let ctx = TestContext::new();
        register(&ctx).await;

        let token = ctx
            .service
            .login(LoginInput {
                email: "mia@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(token.token_type, "bearer");

        let identity = ctx
            .service
            .authorize_request(AuthorizeRequestInput {
                token: token.access_token,
            })
            .await
            .unwrap();
        assert_eq!(identity.user().email, "mia@example.com");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let ctx = TestContext::new();
        register(&ctx).await;

        let result = ctx
            .service
            .login(LoginInput {
                email: "mia@example.com".to_string(),
                password: "nope".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let ctx = TestContext::new();

        let result = ctx
            .service
            .authorize_request(AuthorizeRequestInput {
                token: "not-a-jwt".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidToken));
    }
}
