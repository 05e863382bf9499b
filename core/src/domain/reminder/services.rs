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
    pet_health::ports::{
        AllergyRepository, InsuranceRepository, MedicalConditionRepository, MedicationRepository,
        VaccinationRepository,
    },
    reminder::{
        entities::Reminder,
        ports::{ReminderRepository, ReminderService},
        value_objects::{CreateReminderInput, UpdateReminderInput},
    },
    user::ports::UserRepository,
};

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> ReminderService
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
    async fn get_reminders(
        &self,
        identity: Identity,
        pagination: Pagination,
    ) -> Result<Paginated<Reminder>, CoreError> {
        self.reminder_repository
            .fetch_reminders_by_owner(Self::pet_scope(&identity), pagination)
            .await
    }

    async fn get_pet_reminders(
        &self,
        identity: Identity,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<Reminder>, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.reminder_repository
            .fetch_reminders_by_pet(pet.id, pagination)
            .await
    }

    async fn get_reminder(&self, identity: Identity, reminder_id: Uuid) -> Result<Reminder, CoreError> {
        let reminder = self
            .reminder_repository
            .get_reminder_by_id(reminder_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Reminder"))?;

        self.owned_pet(&identity, reminder.pet_id).await?;

        Ok(reminder)
    }

    async fn create_reminder(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: CreateReminderInput,
    ) -> Result<Reminder, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.reminder_repository
            .create_reminder(Reminder::new(pet.id, input))
            .await
    }

    async fn update_reminder(
        &self,
        identity: Identity,
        reminder_id: Uuid,
        input: UpdateReminderInput,
    ) -> Result<Reminder, CoreError> {
        let mut reminder = self.get_reminder(identity, reminder_id).await?;
        reminder.update(input);

        self.reminder_repository.update_reminder(reminder).await
    }

    async fn delete_reminder(&self, identity: Identity, reminder_id: Uuid) -> Result<(), CoreError> {
        let reminder = self.get_reminder(identity, reminder_id).await?;

        self.reminder_repository.delete_reminder(reminder.id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::{
        domain::pet::{ports::PetService, value_objects::CreatePetInput},
        test_support::TestContext,
    };

    fn walk() -> CreateReminderInput {
        CreateReminderInput {
            category: "Walk".to_string(),
            title: Some("Evening walk".to_string()),
            notes: None,
            reminder_date: None,
            start_date: None,
            end_date: None,
            reminder_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            dosage: None,
            frequency: "Daily".to_string(),
            end_frequency_date: None,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn reminders_are_listed_through_owned_pets_only() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let other = ctx.identity("other@example.com", false).await;

        let pet = ctx
            .service
            .create_pet(
                owner.clone(),
                CreatePetInput {
                    name: "Bori".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let reminder = ctx
            .service
            .create_reminder(owner.clone(), pet.id, walk())
            .await
            .unwrap();
        assert!(reminder.is_active);

        let mine = ctx
            .service
            .get_reminders(owner, Pagination::default())
            .await
            .unwrap();
        assert_eq!(mine.count, 1);

        let theirs = ctx
            .service
            .get_reminders(other.clone(), Pagination::default())
            .await
            .unwrap();
        assert_eq!(theirs.count, 0);

        assert_eq!(
            ctx.service.get_reminder(other, reminder.id).await,
            Err(CoreError::PermissionDenied)
        );
    }

    #[tokio::test]
    async fn patch_keeps_required_fields_unless_supplied() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let pet = ctx
            .service
            .create_pet(
                owner.clone(),
                CreatePetInput {
                    name: "Bori".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let reminder = ctx
            .service
            .create_reminder(owner.clone(), pet.id, walk())
            .await
            .unwrap();

        let updated = ctx
            .service
            .update_reminder(
                owner,
                reminder.id,
                UpdateReminderInput {
                    is_active: Some(false),
                    title: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(!updated.is_active);
        assert_eq!(updated.title, None);
        assert_eq!(updated.frequency, "Daily");
        assert_eq!(updated.reminder_time, reminder.reminder_time);
    }
}
