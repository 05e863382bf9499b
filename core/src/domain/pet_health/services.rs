use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    barcode::ports::{BarcodeDecoder, ProductCatalog},
    common::{
        entities::app_errors::CoreError,
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
    pet_health::{
        entities::{Allergy, Insurance, MedicalCondition, Medication, Vaccination},
        ports::{
            AllergyRepository, InsuranceRepository, MedicalConditionRepository,
            MedicationRepository, PetHealthService, VaccinationRepository,
        },
        value_objects::{
            CreateAllergyInput, CreateVaccinationInput, UpdateAllergyInput,
            UpdateVaccinationInput, UpsertInsuranceInput, UpsertMedicalConditionInput,
            UpsertMedicationInput,
        },
    },
    reminder::ports::ReminderRepository,
    user::ports::UserRepository,
};

/// A sub-record reached through another pet's path does not exist for that pet.
fn belonging_to<R>(
    record: Option<R>,
    pet_id: Uuid,
    pet_of: impl Fn(&R) -> Uuid,
    resource: &str,
) -> Result<R, CoreError> {
    record
        .filter(|record| pet_of(record) == pet_id)
        .ok_or_else(|| CoreError::not_found(resource))
}

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> PetHealthService
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
    async fn get_vaccinations(
        &self,
        identity: Identity,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<Vaccination>, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.vaccination_repository
            .fetch_vaccinations(pet.id, pagination)
            .await
    }

    async fn get_vaccination(
        &self,
        identity: Identity,
        pet_id: Uuid,
        vaccination_id: Uuid,
    ) -> Result<Vaccination, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;
        let vaccination = self
            .vaccination_repository
            .get_vaccination_by_id(vaccination_id)
            .await?;

        belonging_to(vaccination, pet.id, |v| v.pet_id, "Vaccination")
    }

    async fn create_vaccination(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: CreateVaccinationInput,
    ) -> Result<Vaccination, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.vaccination_repository
            .create_vaccination(Vaccination::new(pet.id, input.name, input.date))
            .await
    }

    async fn update_vaccination(
        &self,
        identity: Identity,
        pet_id: Uuid,
        vaccination_id: Uuid,
        input: UpdateVaccinationInput,
    ) -> Result<Vaccination, CoreError> {
        let mut vaccination = self
            .get_vaccination(identity, pet_id, vaccination_id)
            .await?;
        vaccination.update(input);

        self.vaccination_repository
            .update_vaccination(vaccination)
            .await
    }

    async fn delete_vaccination(
        &self,
        identity: Identity,
        pet_id: Uuid,
        vaccination_id: Uuid,
    ) -> Result<(), CoreError> {
        let vaccination = self
            .get_vaccination(identity, pet_id, vaccination_id)
            .await?;

        self.vaccination_repository
            .delete_vaccination(vaccination.id)
            .await
    }

    async fn get_allergies(
        &self,
        identity: Identity,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<Allergy>, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.allergy_repository
            .fetch_allergies(pet.id, pagination)
            .await
    }

    async fn get_allergy(
        &self,
        identity: Identity,
        pet_id: Uuid,
        allergy_id: Uuid,
    ) -> Result<Allergy, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;
        let allergy = self.allergy_repository.get_allergy_by_id(allergy_id).await?;

        belonging_to(allergy, pet.id, |a| a.pet_id, "Allergy")
    }

    async fn create_allergy(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: CreateAllergyInput,
    ) -> Result<Allergy, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.allergy_repository
            .create_allergy(Allergy::new(pet.id, input.name))
            .await
    }

    async fn update_allergy(
        &self,
        identity: Identity,
        pet_id: Uuid,
        allergy_id: Uuid,
        input: UpdateAllergyInput,
    ) -> Result<Allergy, CoreError> {
        let mut allergy = self.get_allergy(identity, pet_id, allergy_id).await?;
        allergy.update(input);

        self.allergy_repository.update_allergy(allergy).await
    }

    async fn delete_allergy(
        &self,
        identity: Identity,
        pet_id: Uuid,
        allergy_id: Uuid,
    ) -> Result<(), CoreError> {
        let allergy = self.get_allergy(identity, pet_id, allergy_id).await?;

        self.allergy_repository.delete_allergy(allergy.id).await
    }

    async fn get_insurance(&self, identity: Identity, pet_id: Uuid) -> Result<Insurance, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.insurance_repository
            .get_insurance_by_pet(pet.id)
            .await?
            .ok_or_else(|| CoreError::not_found("Insurance"))
    }

    async fn upsert_insurance(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: UpsertInsuranceInput,
    ) -> Result<Insurance, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        match self.insurance_repository.get_insurance_by_pet(pet.id).await? {
            Some(mut insurance) => {
                insurance.merge(input);
                self.insurance_repository.update_insurance(insurance).await
            }
            None => {
                let mut insurance = Insurance::empty(pet.id);
                insurance.merge(input);
                self.insurance_repository.create_insurance(insurance).await
            }
        }
    }

    async fn delete_insurance(&self, identity: Identity, pet_id: Uuid) -> Result<(), CoreError> {
        let insurance = self.get_insurance(identity, pet_id).await?;

        self.insurance_repository
            .delete_insurance(insurance.id)
            .await
    }

    async fn get_medical_condition(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> Result<MedicalCondition, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.medical_condition_repository
            .get_medical_condition_by_pet(pet.id)
            .await?
            .ok_or_else(|| CoreError::not_found("Medical condition"))
    }

    async fn upsert_medical_condition(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: UpsertMedicalConditionInput,
    ) -> Result<MedicalCondition, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        match self
            .medical_condition_repository
            .get_medical_condition_by_pet(pet.id)
            .await?
        {
            Some(mut condition) => {
                condition.merge(input);
                self.medical_condition_repository
                    .update_medical_condition(condition)
                    .await
            }
            None => {
                let mut condition = MedicalCondition::empty(pet.id);
                condition.merge(input);
                self.medical_condition_repository
                    .create_medical_condition(condition)
                    .await
            }
        }
    }

    async fn delete_medical_condition(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> Result<(), CoreError> {
        let condition = self.get_medical_condition(identity, pet_id).await?;

        self.medical_condition_repository
            .delete_medical_condition(condition.id)
            .await
    }

    async fn get_medication(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> Result<Medication, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.medication_repository
            .get_medication_by_pet(pet.id)
            .await?
            .ok_or_else(|| CoreError::not_found("Medication"))
    }

    async fn upsert_medication(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: UpsertMedicationInput,
    ) -> Result<Medication, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        match self.medication_repository.get_medication_by_pet(pet.id).await? {
            Some(mut medication) => {
                medication.merge(input);
                self.medication_repository.update_medication(medication).await
            }
            None => {
                let mut medication = Medication::empty(pet.id);
                medication.merge(input);
                self.medication_repository.create_medication(medication).await
            }
        }
    }

    async fn delete_medication(&self, identity: Identity, pet_id: Uuid) -> Result<(), CoreError> {
        let medication = self.get_medication(identity, pet_id).await?;

        self.medication_repository
            .delete_medication(medication.id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::pet::{entities::Pet, ports::PetService, value_objects::CreatePetInput},
        test_support::TestContext,
    };

    async fn pet_of(ctx: &TestContext, owner: &Identity) -> Pet {
        ctx.service
            .create_pet(
                owner.clone(),
                CreatePetInput {
                    name: "Tofu".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn deleting_one_of_two_vaccinations_leaves_the_other() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let pet = pet_of(&ctx, &owner).await;

        let rabies = ctx
            .service
            .create_vaccination(
                owner.clone(),
                pet.id,
                CreateVaccinationInput {
                    name: Some("Rabies".to_string()),
                    date: Some("2024-03-01".to_string()),
                },
            )
            .await
            .unwrap();
        let distemper = ctx
            .service
            .create_vaccination(
                owner.clone(),
                pet.id,
                CreateVaccinationInput {
                    name: Some("Distemper".to_string()),
                    date: None,
                },
            )
            .await
            .unwrap();

        ctx.service
            .delete_vaccination(owner.clone(), pet.id, rabies.id)
            .await
            .unwrap();

        let remaining = ctx
            .service
            .get_vaccinations(owner, pet.id, Pagination::default())
            .await
            .unwrap();
        assert_eq!(remaining.count, 1);
        assert_eq!(remaining.data, vec![distemper]);
    }

    #[tokio::test]
    async fn stranger_cannot_touch_health_records() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let stranger = ctx.identity("stranger@example.com", false).await;
        let pet = pet_of(&ctx, &owner).await;

        let listing = ctx
            .service
            .get_allergies(stranger.clone(), pet.id, Pagination::default())
            .await;
        assert_eq!(listing, Err(CoreError::PermissionDenied));

        let upsert = ctx
            .service
            .upsert_insurance(stranger, pet.id, UpsertInsuranceInput::default())
            .await;
        assert_eq!(upsert, Err(CoreError::PermissionDenied));
    }

    #[tokio::test]
    async fn sub_record_of_another_pet_is_not_found() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let first = pet_of(&ctx, &owner).await;
        let second = pet_of(&ctx, &owner).await;

        let allergy = ctx
            .service
            .create_allergy(
                owner.clone(),
                first.id,
                CreateAllergyInput {
                    name: Some("Chicken".to_string()),
                },
            )
            .await
            .unwrap();

        let result = ctx.service.get_allergy(owner, second.id, allergy.id).await;
        assert_eq!(result, Err(CoreError::NotFound("Allergy not found".to_string())));
    }

    #[tokio::test]
    async fn insurance_upserts_merge_into_a_single_row() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let pet = pet_of(&ctx, &owner).await;

        let first = ctx
            .service
            .upsert_insurance(
                owner.clone(),
                pet.id,
                UpsertInsuranceInput {
                    provider: Some(Some("PetCare".to_string())),
                    deductible: Some(Some("100".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let second = ctx
            .service
            .upsert_insurance(
                owner.clone(),
                pet.id,
                UpsertInsuranceInput {
                    deductible: Some(Some("250".to_string())),
                    notes: Some(Some("renews in May".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.provider.as_deref(), Some("PetCare"));
        assert_eq!(second.deductible.as_deref(), Some("250"));
        assert_eq!(second.notes.as_deref(), Some("renews in May"));
        assert_eq!(ctx.store.insurance_rows_for(pet.id), 1);
    }

    #[tokio::test]
    async fn absent_singleton_is_not_found_until_created() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let pet = pet_of(&ctx, &owner).await;

        assert_eq!(
            ctx.service.get_medication(owner.clone(), pet.id).await,
            Err(CoreError::NotFound("Medication not found".to_string()))
        );

        ctx.service
            .upsert_medication(
                owner.clone(),
                pet.id,
                UpsertMedicationInput {
                    name: Some(Some("Apoquel".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        ctx.service
            .delete_medication(owner.clone(), pet.id)
            .await
            .unwrap();

        assert!(ctx.service.get_medication(owner, pet.id).await.is_err());
    }
}
