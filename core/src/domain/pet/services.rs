use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    barcode::ports::{BarcodeDecoder, ProductCatalog},
    common::{
        entities::app_errors::CoreError,
        policies::ensure_owner,
        services::Service,
        value_objects::{Paginated, Pagination},
    },
    crypto::ports::HasherRepository,
    food_scan::ports::FoodScanResultRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    lesson::ports::{LessonRepository, ProgressLessonRepository},
    llm::ports::{LLMClient, VectorStore},
    pet::{
        entities::Pet,
        ports::{PetRepository, PetService},
        value_objects::{CreatePetInput, UpdatePetInput},
    },
    pet_health::ports::{
        AllergyRepository, InsuranceRepository, MedicalConditionRepository, MedicationRepository,
        VaccinationRepository,
    },
    reminder::ports::ReminderRepository,
    user::ports::UserRepository,
};

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC>
    Service<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC>
where
    P: PetRepository,
{
    /// Loads a pet and checks that the caller may act on it and its sub-records.
    pub(crate) async fn owned_pet(&self, identity: &Identity, pet_id: Uuid) -> Result<Pet, CoreError> {
        let pet = self
            .pet_repository
            .get_pet_by_id(pet_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Pet"))?;

        ensure_owner(identity, &pet)?;

        Ok(pet)
    }

    /// Superusers see every pet, everyone else only their own.
    pub(crate) fn pet_scope(identity: &Identity) -> Option<Uuid> {
        (!identity.is_superuser()).then(|| identity.id())
    }
}

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> PetService
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
    async fn get_pets(
        &self,
        identity: Identity,
        pagination: Pagination,
    ) -> Result<Paginated<Pet>, CoreError> {
        self.pet_repository
            .fetch_pets(Self::pet_scope(&identity), pagination)
            .await
    }

    async fn get_pet(&self, identity: Identity, pet_id: Uuid) -> Result<Pet, CoreError> {
        self.owned_pet(&identity, pet_id).await
    }

    async fn create_pet(&self, identity: Identity, input: CreatePetInput) -> Result<Pet, CoreError> {
        let pet = Pet::new(identity.id(), input);

        self.pet_repository.create_pet(pet).await
    }

    async fn update_pet(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: UpdatePetInput,
    ) -> Result<Pet, CoreError> {
        let mut pet = self.owned_pet(&identity, pet_id).await?;
        pet.update(input);

        self.pet_repository.update_pet(pet).await
    }

    async fn delete_pet(&self, identity: Identity, pet_id: Uuid) -> Result<(), CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.pet_repository.delete_pet(pet.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestContext;

    fn mochi() -> CreatePetInput {
        CreatePetInput {
            name: "Mochi".to_string(),
            species: Some("dog".to_string()),
            breed: Some("Shiba".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn stranger_cannot_read_update_or_delete_a_pet() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let stranger = ctx.identity("stranger@example.com", false).await;
        let pet = ctx.service.create_pet(owner, mochi()).await.unwrap();

        assert_eq!(
            ctx.service.get_pet(stranger.clone(), pet.id).await,
            Err(CoreError::PermissionDenied)
        );
        assert_eq!(
            ctx.service
                .update_pet(stranger.clone(), pet.id, UpdatePetInput::default())
                .await,
            Err(CoreError::PermissionDenied)
        );
        assert_eq!(
            ctx.service.delete_pet(stranger, pet.id).await,
            Err(CoreError::PermissionDenied)
        );
    }

    #[tokio::test]
    async fn missing_pet_is_not_found() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;

        assert_eq!(
            ctx.service.get_pet(owner, Uuid::new_v4()).await,
            Err(CoreError::NotFound("Pet not found".to_string()))
        );
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_caller_unless_superuser() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let other = ctx.identity("other@example.com", false).await;
        let admin = ctx.identity("admin@example.com", true).await;

        ctx.service.create_pet(owner.clone(), mochi()).await.unwrap();
        ctx.service.create_pet(owner.clone(), mochi()).await.unwrap();
        ctx.service.create_pet(other, mochi()).await.unwrap();

        let own = ctx
            .service
            .get_pets(owner.clone(), Pagination::new(Some(0), Some(1)))
            .await
            .unwrap();
        assert_eq!(own.data.len(), 1);
        assert_eq!(own.count, 2);
        assert!(own.data.iter().all(|pet| pet.user_id == owner.id()));

        let all = ctx.service.get_pets(admin, Pagination::default()).await.unwrap();
        assert_eq!(all.count, 3);
    }

    #[tokio::test]
    async fn partial_update_only_touches_supplied_fields() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let pet = ctx.service.create_pet(owner.clone(), mochi()).await.unwrap();

        let updated = ctx
            .service
            .update_pet(
                owner,
                pet.id,
                UpdatePetInput {
                    age: Some(Some(3)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.age, Some(3));
        assert_eq!(updated.name, pet.name);
        assert_eq!(updated.breed, pet.breed);
        assert_eq!(updated.species, pet.species);
    }
}
