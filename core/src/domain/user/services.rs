use tracing::info;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    barcode::ports::{BarcodeDecoder, ProductCatalog},
    common::{
        entities::app_errors::CoreError,
        policies::{ensure_owner, ensure_policy, ensure_superuser},
        services::Service,
        value_objects::{Paginated, Pagination},
    },
    crypto::ports::HasherRepository,
    food_scan::ports::FoodScanResultRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    lesson::ports::{LessonRepository, ProgressLessonRepository},
    llm::ports::{LLMClient, VectorStore},
    pet::ports::PetRepository,
    pet_health::ports::{
        AllergyRepository, InsuranceRepository, MedicalConditionRepository, MedicationRepository,
        VaccinationRepository,
    },
    reminder::ports::ReminderRepository,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::{RegisterUserInput, UpdateProfileInput, UpdateUserInput},
    },
};

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC>
    Service<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC>
where
    U: UserRepository,
    H: HasherRepository,
{
    async fn ensure_email_available(&self, email: &str, current: Option<Uuid>) -> Result<(), CoreError> {
        let existing = self
            .user_repository
            .get_user_by_email(email.to_string())
            .await?;

        match existing {
            Some(user) if Some(user.id) != current => Err(CoreError::Conflict(
                "The user with this email already exists in the system".to_string(),
            )),
            _ => Ok(()),
        }
    }

    async fn apply_profile_update(
        &self,
        mut user: User,
        input: UpdateProfileInput,
    ) -> Result<User, CoreError> {
        if let Some(email) = &input.email {
            self.ensure_email_available(email, Some(user.id)).await?;
        }

        let hashed_password = input
            .password
            .as_deref()
            .map(|password| self.hasher_repository.hash_password(password))
            .transpose()?;

        user.update_profile(input, hashed_password);
        Ok(user)
    }

    async fn find_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("User"))
    }
}

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> UserService
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
    async fn register_user(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        self.ensure_email_available(&input.email, None).await?;

        let hashed_password = self.hasher_repository.hash_password(&input.password)?;
        let user = User::new(input.email, hashed_password, input.name, false);

        self.user_repository.create_user(user).await
    }

    async fn get_current_user(&self, identity: Identity) -> Result<User, CoreError> {
        Ok(identity.user().clone())
    }

    async fn update_current_user(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> Result<User, CoreError> {
        let user = self
            .apply_profile_update(identity.user().clone(), input)
            .await?;

        self.user_repository.update_user(user).await
    }

    async fn delete_current_user(&self, identity: Identity) -> Result<(), CoreError> {
        ensure_policy(
            !identity.is_superuser(),
            CoreError::Forbidden("Super users are not allowed to delete themselves".to_string()),
        )?;

        self.user_repository.delete_user(identity.id()).await
    }

    async fn get_users(
        &self,
        identity: Identity,
        pagination: Pagination,
    ) -> Result<Paginated<User>, CoreError> {
        ensure_superuser(&identity)?;

        self.user_repository.fetch_users(pagination).await
    }

    async fn get_user(&self, identity: Identity, user_id: Uuid) -> Result<User, CoreError> {
        let user = self.find_user(user_id).await?;
        ensure_owner(&identity, &user)?;

        Ok(user)
    }

    async fn update_user(
        &self,
        identity: Identity,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> Result<User, CoreError> {
        ensure_superuser(&identity)?;

        let user = self.find_user(user_id).await?;
        let mut user = self.apply_profile_update(user, input.profile).await?;

        if let Some(is_active) = input.is_active {
            user.is_active = is_active;
        }
        if let Some(is_superuser) = input.is_superuser {
            user.is_superuser = is_superuser;
        }

        self.user_repository.update_user(user).await
    }

    async fn delete_user(&self, identity: Identity, user_id: Uuid) -> Result<(), CoreError> {
        ensure_superuser(&identity)?;
        ensure_policy(
            identity.id() != user_id,
            CoreError::Forbidden("Super users are not allowed to delete themselves".to_string()),
        )?;

        self.find_user(user_id).await?;
        self.user_repository.delete_user(user_id).await
    }

    async fn ensure_first_superuser(&self, email: String, password: String) -> Result<User, CoreError> {
        if let Some(user) = self.user_repository.get_user_by_email(email.clone()).await? {
            return Ok(user);
        }

        let hashed_password = self.hasher_repository.hash_password(&password)?;
        let user = self
            .user_repository
            .create_user(User::new(email, hashed_password, None, true))
            .await?;

        info!("first superuser created: {}", user.id);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestContext;

    #[tokio::test]
    async fn registering_twice_with_the_same_email_conflicts() {
        let ctx = TestContext::new();
        let input = RegisterUserInput {
            email: "kim@example.com".to_string(),
            password: "correct horse".to_string(),
            name: Some("Kim".to_string()),
        };

        let user = ctx.service.register_user(input.clone()).await.unwrap();
        assert!(!user.is_superuser);
        assert_ne!(user.hashed_password, "correct horse");

        let again = ctx.service.register_user(input).await;
        assert!(matches!(again, Err(CoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn profile_update_keeps_untouched_fields() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;

        let updated = ctx
            .service
            .update_current_user(
                owner.clone(),
                UpdateProfileInput {
                    native_language: Some(Some("ko".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.native_language.as_deref(), Some("ko"));
        assert_eq!(updated.email, owner.user().email);
        assert_eq!(updated.hashed_password, owner.user().hashed_password);
    }

    #[tokio::test]
    async fn listing_users_requires_superuser() {
        let ctx = TestContext::new();
        let regular = ctx.identity("regular@example.com", false).await;
        let admin = ctx.identity("admin@example.com", true).await;

        let denied = ctx.service.get_users(regular, Pagination::default()).await;
        assert!(matches!(denied, Err(CoreError::Forbidden(_))));

        let page = ctx.service.get_users(admin, Pagination::default()).await.unwrap();
        assert_eq!(page.count, 2);
    }

    #[tokio::test]
    async fn superuser_cannot_delete_themselves() {
        let ctx = TestContext::new();
        let admin = ctx.identity("admin@example.com", true).await;

        let result = ctx.service.delete_user(admin.clone(), admin.id()).await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn first_superuser_is_created_once() {
        let ctx = TestContext::new();

        let first = ctx
            .service
            .ensure_first_superuser("root@example.com".to_string(), "pw".to_string())
            .await
            .unwrap();
        let second = ctx
            .service
            .ensure_first_superuser("root@example.com".to_string(), "pw".to_string())
            .await
            .unwrap();

        assert!(first.is_superuser);
        assert_eq!(first.id, second.id);
    }
}
