//! In-memory adapters used by the service tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use uuid::Uuid;

use crate::{
    domain::{
        authentication::value_objects::Identity,
        barcode::{
            entities::{DecodedBarcode, ProductData},
            ports::{MockBarcodeDecoder, ProductCatalog},
            value_objects::BarcodeStrategy,
        },
        common::{
            entities::app_errors::CoreError,
            services::{Service, ServiceSettings},
            value_objects::{Paginated, Pagination},
        },
        crypto::ports::HasherRepository,
        food_scan::{entities::FoodScanResult, ports::FoodScanResultRepository},
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
        lesson::{
            entities::{Lesson, LessonStatus, ProgressLesson},
            ports::{LessonRepository, ProgressLessonRepository},
        },
        llm::{
            ports::{LLMClient, VectorStore},
            value_objects::{CompletionOptions, InlineImage, RetrievedDocument},
        },
        pet::{entities::Pet, ports::PetRepository},
        pet_health::{
            entities::{Allergy, Insurance, MedicalCondition, Medication, Vaccination},
            ports::{
                AllergyRepository, InsuranceRepository, MedicalConditionRepository,
                MedicationRepository, VaccinationRepository,
            },
        },
        reminder::{entities::Reminder, ports::ReminderRepository},
        user::{entities::User, ports::UserRepository},
    },
    infrastructure::jwt::jwt_repository::JwtTokenRepository,
};

pub type TestService = Service<
    InMemoryStore,
    PlainHasher,
    JwtTokenRepository,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    FakeLlm,
    FakeVectorStore,
    FakeCatalog,
    MockBarcodeDecoder,
    InMemoryStore,
>;

pub struct TestContext {
    pub service: TestService,
    pub store: InMemoryStore,
    pub llm: FakeLlm,
    pub vector_store: FakeVectorStore,
    pub catalog: FakeCatalog,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_barcode(MockBarcodeDecoder::new(), BarcodeStrategy::ProductDatabase)
    }

    pub fn with_barcode(decoder: MockBarcodeDecoder, strategy: BarcodeStrategy) -> Self {
        let store = InMemoryStore::default();
        let llm = FakeLlm::default();
        let vector_store = FakeVectorStore::default();
        let catalog = FakeCatalog::default();

        let service = Service::new(
            store.clone(),
            PlainHasher,
            JwtTokenRepository::new("test-secret".to_string(), 60),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            llm.clone(),
            vector_store.clone(),
            catalog.clone(),
            decoder,
            store.clone(),
            ServiceSettings {
                barcode_strategy: strategy,
            },
        );

        Self {
            service,
            store,
            llm,
            vector_store,
            catalog,
        }
    }

    /// Stores an active user and returns it as an authenticated identity.
    pub async fn identity(&self, email: &str, is_superuser: bool) -> Identity {
        let hashed = PlainHasher.hash_password("password").unwrap_or_default();
        let user = self
            .store
            .create_user(User::new(email.to_string(), hashed, None, is_superuser))
            .await
            .unwrap_or_else(|e| panic!("could not store test user: {e}"));
        Identity::new(user)
    }
}

/// Reversible "hash" so tests stay fast.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainHasher;

impl HasherRepository for PlainHasher {
    fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        Ok(format!("hashed:{password}"))
    }

    fn verify_password(&self, password: &str, hashed_password: &str) -> Result<bool, CoreError> {
        Ok(hashed_password == format!("hashed:{password}"))
    }
}

trait Row: Clone {
    fn row_id(&self) -> Uuid;
}

macro_rules! impl_row {
    ($($entity:ty),* $(,)?) => {
        $(impl Row for $entity {
            fn row_id(&self) -> Uuid {
                self.id
            }
        })*
    };
}

impl_row!(
    User,
    Pet,
    Reminder,
    Vaccination,
    Allergy,
    Insurance,
    MedicalCondition,
    Medication,
    Lesson,
    ProgressLesson,
    FoodScanResult,
);

fn insert<T: Row>(rows: &mut Vec<T>, row: T) -> T {
    rows.push(row.clone());
    row
}

fn replace<T: Row>(rows: &mut [T], row: T) -> Result<T, CoreError> {
    let slot = rows
        .iter_mut()
        .find(|existing| existing.row_id() == row.row_id())
        .ok_or(CoreError::InternalServerError)?;
    *slot = row.clone();
    Ok(row)
}

fn find<T: Row>(rows: &[T], id: Uuid) -> Option<T> {
    rows.iter().find(|row| row.row_id() == id).cloned()
}

fn page<T: Row>(rows: Vec<T>, pagination: Pagination) -> Paginated<T> {
    let count = rows.len() as u64;
    Paginated::new(pagination.apply(&rows), count)
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    pets: Vec<Pet>,
    reminders: Vec<Reminder>,
    vaccinations: Vec<Vaccination>,
    allergies: Vec<Allergy>,
    insurances: Vec<Insurance>,
    medical_conditions: Vec<MedicalCondition>,
    medications: Vec<Medication>,
    lessons: Vec<Lesson>,
    progress_lessons: Vec<ProgressLesson>,
    food_scans: Vec<FoodScanResult>,
}

impl Tables {
    fn remove_pet(&mut self, pet_id: Uuid) {
        self.pets.retain(|pet| pet.id != pet_id);
        self.reminders.retain(|row| row.pet_id != pet_id);
        self.vaccinations.retain(|row| row.pet_id != pet_id);
        self.allergies.retain(|row| row.pet_id != pet_id);
        self.insurances.retain(|row| row.pet_id != pet_id);
        self.medical_conditions.retain(|row| row.pet_id != pet_id);
        self.medications.retain(|row| row.pet_id != pet_id);
        self.food_scans.retain(|row| row.pet_id != pet_id);
    }

    fn owner_of(&self, pet_id: Uuid) -> Option<Uuid> {
        self.pets
            .iter()
            .find(|pet| pet.id == pet_id)
            .map(|pet| pet.user_id)
    }
}

/// Every repository over one shared set of tables, with the database's cascades.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn insurance_rows_for(&self, pet_id: Uuid) -> usize {
        self.tables()
            .insurances
            .iter()
            .filter(|row| row.pet_id == pet_id)
            .count()
    }
}

impl UserRepository for InMemoryStore {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        Ok(insert(&mut self.tables().users, user))
    }

    async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(find(&self.tables().users, user_id))
    }

    async fn get_user_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        Ok(self
            .tables()
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn fetch_users(&self, pagination: Pagination) -> Result<Paginated<User>, CoreError> {
        Ok(page(self.tables().users.clone(), pagination))
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        replace(&mut self.tables().users, user)
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), CoreError> {
        let mut tables = self.tables();
        tables.users.retain(|user| user.id != user_id);
        let owned: Vec<Uuid> = tables
            .pets
            .iter()
            .filter(|pet| pet.user_id == user_id)
            .map(|pet| pet.id)
            .collect();
        for pet_id in owned {
            tables.remove_pet(pet_id);
        }
        Ok(())
    }
}

impl PetRepository for InMemoryStore {
    async fn fetch_pets(
        &self,
        owner_id: Option<Uuid>,
        pagination: Pagination,
    ) -> Result<Paginated<Pet>, CoreError> {
        let rows = self
            .tables()
            .pets
            .iter()
            .filter(|pet| owner_id.is_none_or(|owner| pet.user_id == owner))
            .cloned()
            .collect();
        Ok(page(rows, pagination))
    }

    async fn get_pet_by_id(&self, pet_id: Uuid) -> Result<Option<Pet>, CoreError> {
        Ok(find(&self.tables().pets, pet_id))
    }

    async fn create_pet(&self, pet: Pet) -> Result<Pet, CoreError> {
        Ok(insert(&mut self.tables().pets, pet))
    }

    async fn update_pet(&self, pet: Pet) -> Result<Pet, CoreError> {
        replace(&mut self.tables().pets, pet)
    }

    async fn delete_pet(&self, pet_id: Uuid) -> Result<(), CoreError> {
        self.tables().remove_pet(pet_id);
        Ok(())
    }
}

impl ReminderRepository for InMemoryStore {
    async fn fetch_reminders_by_owner(
        &self,
        owner_id: Option<Uuid>,
        pagination: Pagination,
    ) -> Result<Paginated<Reminder>, CoreError> {
        let tables = self.tables();
        let rows = tables
            .reminders
            .iter()
            .filter(|row| owner_id.is_none_or(|owner| tables.owner_of(row.pet_id) == Some(owner)))
            .cloned()
            .collect();
        Ok(page(rows, pagination))
    }

    async fn fetch_reminders_by_pet(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<Reminder>, CoreError> {
        let rows = self
            .tables()
            .reminders
            .iter()
            .filter(|row| row.pet_id == pet_id)
            .cloned()
            .collect();
        Ok(page(rows, pagination))
    }

    async fn get_reminder_by_id(&self, reminder_id: Uuid) -> Result<Option<Reminder>, CoreError> {
        Ok(find(&self.tables().reminders, reminder_id))
    }

    async fn create_reminder(&self, reminder: Reminder) -> Result<Reminder, CoreError> {
        Ok(insert(&mut self.tables().reminders, reminder))
    }

    async fn update_reminder(&self, reminder: Reminder) -> Result<Reminder, CoreError> {
        replace(&mut self.tables().reminders, reminder)
    }

    async fn delete_reminder(&self, reminder_id: Uuid) -> Result<(), CoreError> {
        self.tables().reminders.retain(|row| row.id != reminder_id);
        Ok(())
    }
}

impl VaccinationRepository for InMemoryStore {
    async fn fetch_vaccinations(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<Vaccination>, CoreError> {
        let rows = self
            .tables()
            .vaccinations
            .iter()
            .filter(|row| row.pet_id == pet_id)
            .cloned()
            .collect();
        Ok(page(rows, pagination))
    }

    async fn get_vaccination_by_id(&self, vaccination_id: Uuid) -> Result<Option<Vaccination>, CoreError> {
        Ok(find(&self.tables().vaccinations, vaccination_id))
    }

    async fn create_vaccination(&self, vaccination: Vaccination) -> Result<Vaccination, CoreError> {
        Ok(insert(&mut self.tables().vaccinations, vaccination))
    }

    async fn update_vaccination(&self, vaccination: Vaccination) -> Result<Vaccination, CoreError> {
        replace(&mut self.tables().vaccinations, vaccination)
    }

    async fn delete_vaccination(&self, vaccination_id: Uuid) -> Result<(), CoreError> {
        self.tables().vaccinations.retain(|row| row.id != vaccination_id);
        Ok(())
    }
}

impl AllergyRepository for InMemoryStore {
    async fn fetch_allergies(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<Allergy>, CoreError> {
        let rows = self
            .tables()
            .allergies
            .iter()
            .filter(|row| row.pet_id == pet_id)
            .cloned()
            .collect();
        Ok(page(rows, pagination))
    }

    async fn get_allergy_by_id(&self, allergy_id: Uuid) -> Result<Option<Allergy>, CoreError> {
        Ok(find(&self.tables().allergies, allergy_id))
    }

    async fn create_allergy(&self, allergy: Allergy) -> Result<Allergy, CoreError> {
        Ok(insert(&mut self.tables().allergies, allergy))
    }

    async fn update_allergy(&self, allergy: Allergy) -> Result<Allergy, CoreError> {
        replace(&mut self.tables().allergies, allergy)
    }

    async fn delete_allergy(&self, allergy_id: Uuid) -> Result<(), CoreError> {
        self.tables().allergies.retain(|row| row.id != allergy_id);
        Ok(())
    }
}

impl InsuranceRepository for InMemoryStore {
    async fn get_insurance_by_pet(&self, pet_id: Uuid) -> Result<Option<Insurance>, CoreError> {
        Ok(self
            .tables()
            .insurances
            .iter()
            .find(|row| row.pet_id == pet_id)
            .cloned())
    }

    async fn create_insurance(&self, insurance: Insurance) -> Result<Insurance, CoreError> {
        Ok(insert(&mut self.tables().insurances, insurance))
    }

    async fn update_insurance(&self, insurance: Insurance) -> Result<Insurance, CoreError> {
        replace(&mut self.tables().insurances, insurance)
    }

    async fn delete_insurance(&self, insurance_id: Uuid) -> Result<(), CoreError> {
        self.tables().insurances.retain(|row| row.id != insurance_id);
        Ok(())
    }
}

impl MedicalConditionRepository for InMemoryStore {
    async fn get_medical_condition_by_pet(
        &self,
        pet_id: Uuid,
    ) -> Result<Option<MedicalCondition>, CoreError> {
        Ok(self
            .tables()
            .medical_conditions
            .iter()
            .find(|row| row.pet_id == pet_id)
            .cloned())
    }

    async fn create_medical_condition(
        &self,
        condition: MedicalCondition,
    ) -> Result<MedicalCondition, CoreError> {
        Ok(insert(&mut self.tables().medical_conditions, condition))
    }

    async fn update_medical_condition(
        &self,
        condition: MedicalCondition,
    ) -> Result<MedicalCondition, CoreError> {
        replace(&mut self.tables().medical_conditions, condition)
    }

    async fn delete_medical_condition(&self, condition_id: Uuid) -> Result<(), CoreError> {
        self.tables()
            .medical_conditions
            .retain(|row| row.id != condition_id);
        Ok(())
    }
}

impl MedicationRepository for InMemoryStore {
    async fn get_medication_by_pet(&self, pet_id: Uuid) -> Result<Option<Medication>, CoreError> {
        Ok(self
            .tables()
            .medications
            .iter()
            .find(|row| row.pet_id == pet_id)
            .cloned())
    }

    async fn create_medication(&self, medication: Medication) -> Result<Medication, CoreError> {
        Ok(insert(&mut self.tables().medications, medication))
    }

    async fn update_medication(&self, medication: Medication) -> Result<Medication, CoreError> {
        replace(&mut self.tables().medications, medication)
    }

    async fn delete_medication(&self, medication_id: Uuid) -> Result<(), CoreError> {
        self.tables().medications.retain(|row| row.id != medication_id);
        Ok(())
    }
}

impl LessonRepository for InMemoryStore {
    async fn fetch_lessons(&self, pagination: Pagination) -> Result<Paginated<Lesson>, CoreError> {
        Ok(page(self.tables().lessons.clone(), pagination))
    }

    async fn get_lesson_by_id(&self, lesson_id: Uuid) -> Result<Option<Lesson>, CoreError> {
        Ok(find(&self.tables().lessons, lesson_id))
    }

    async fn create_lesson(&self, lesson: Lesson) -> Result<Lesson, CoreError> {
        Ok(insert(&mut self.tables().lessons, lesson))
    }

    async fn update_lesson(&self, lesson: Lesson) -> Result<Lesson, CoreError> {
        replace(&mut self.tables().lessons, lesson)
    }

    async fn delete_lesson(&self, lesson_id: Uuid) -> Result<(), CoreError> {
        let mut tables = self.tables();
        tables.lessons.retain(|row| row.id != lesson_id);
        tables.progress_lessons.retain(|row| row.lesson_id != lesson_id);
        Ok(())
    }
}

impl ProgressLessonRepository for InMemoryStore {
    async fn fetch_progress_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<ProgressLesson>, CoreError> {
        let rows = self
            .tables()
            .progress_lessons
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        Ok(page(rows, pagination))
    }

    async fn fetch_progress_for_lessons(
        &self,
        user_id: Uuid,
        lesson_ids: Vec<Uuid>,
    ) -> Result<Vec<ProgressLesson>, CoreError> {
        Ok(self
            .tables()
            .progress_lessons
            .iter()
            .filter(|row| row.user_id == user_id && lesson_ids.contains(&row.lesson_id))
            .cloned()
            .collect())
    }

    async fn get_current_progress(&self, user_id: Uuid) -> Result<Option<ProgressLesson>, CoreError> {
        Ok(self
            .tables()
            .progress_lessons
            .iter()
            .filter(|row| row.user_id == user_id && row.status == LessonStatus::InProgress)
            .max_by_key(|row| row.updated_at)
            .cloned())
    }

    async fn get_progress_by_id(&self, progress_id: Uuid) -> Result<Option<ProgressLesson>, CoreError> {
        Ok(find(&self.tables().progress_lessons, progress_id))
    }

    async fn create_progress(&self, progress: ProgressLesson) -> Result<ProgressLesson, CoreError> {
        Ok(insert(&mut self.tables().progress_lessons, progress))
    }

    async fn update_progress(&self, progress: ProgressLesson) -> Result<ProgressLesson, CoreError> {
        replace(&mut self.tables().progress_lessons, progress)
    }
}

impl FoodScanResultRepository for InMemoryStore {
    async fn fetch_food_scans_by_pet(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<FoodScanResult>, CoreError> {
        let rows = self
            .tables()
            .food_scans
            .iter()
            .filter(|row| row.pet_id == pet_id)
            .cloned()
            .collect();
        Ok(page(rows, pagination))
    }

    async fn get_food_scan_by_id(&self, result_id: Uuid) -> Result<Option<FoodScanResult>, CoreError> {
        Ok(find(&self.tables().food_scans, result_id))
    }

    async fn create_food_scan(&self, result: FoodScanResult) -> Result<FoodScanResult, CoreError> {
        Ok(insert(&mut self.tables().food_scans, result))
    }
}

impl HealthCheckRepository for InMemoryStore {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus::up("memory", 0))
    }
}

#[derive(Default)]
struct LlmState {
    reply: String,
    calls: usize,
    last_system_prompt: String,
    last_user_prompt: String,
    last_options: Option<CompletionOptions>,
}

/// Answers every completion with a scripted reply and records what it was asked.
#[derive(Clone, Default)]
pub struct FakeLlm {
    state: Arc<Mutex<LlmState>>,
}

impl FakeLlm {
    fn state(&self) -> MutexGuard<'_, LlmState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn reply_with(&self, reply: &str) {
        self.state().reply = reply.to_string();
    }

    pub fn calls(&self) -> usize {
        self.state().calls
    }

    pub fn last_system_prompt(&self) -> String {
        self.state().last_system_prompt.clone()
    }

    pub fn last_user_prompt(&self) -> String {
        self.state().last_user_prompt.clone()
    }

    pub fn last_options(&self) -> Option<CompletionOptions> {
        self.state().last_options
    }

    fn record(&self, system_prompt: String, user_prompt: String, options: CompletionOptions) -> String {
        let mut state = self.state();
        state.calls += 1;
        state.last_system_prompt = system_prompt;
        state.last_user_prompt = user_prompt;
        state.last_options = Some(options);
        state.reply.clone()
    }
}

impl LLMClient for FakeLlm {
    async fn generate_with_text(
        &self,
        system_prompt: String,
        user_prompt: String,
        options: CompletionOptions,
    ) -> Result<String, CoreError> {
        Ok(self.record(system_prompt, user_prompt, options))
    }

    async fn generate_with_image(
        &self,
        system_prompt: String,
        user_prompt: String,
        _image: InlineImage,
        options: CompletionOptions,
    ) -> Result<String, CoreError> {
        Ok(self.record(system_prompt, user_prompt, options))
    }

    async fn embed(&self, text: String) -> Result<Vec<f32>, CoreError> {
        Ok(vec![text.len() as f32, 1.0, 0.5])
    }
}

#[derive(Default)]
struct VectorState {
    documents: Vec<RetrievedDocument>,
    last_top_k: Option<u32>,
}

#[derive(Clone, Default)]
pub struct FakeVectorStore {
    state: Arc<Mutex<VectorState>>,
}

impl FakeVectorStore {
    fn state(&self) -> MutexGuard<'_, VectorState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, document: RetrievedDocument) {
        self.state().documents.push(document);
    }

    pub fn last_top_k(&self) -> Option<u32> {
        self.state().last_top_k
    }
}

impl VectorStore for FakeVectorStore {
    async fn query(&self, _vector: Vec<f32>, top_k: u32) -> Result<Vec<RetrievedDocument>, CoreError> {
        let mut state = self.state();
        state.last_top_k = Some(top_k);
        Ok(state.documents.iter().take(top_k as usize).cloned().collect())
    }
}

#[derive(Default)]
struct CatalogState {
    products: HashMap<String, ProductData>,
    lookups: usize,
}

#[derive(Clone, Default)]
pub struct FakeCatalog {
    state: Arc<Mutex<CatalogState>>,
}

impl FakeCatalog {
    fn state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn insert(&self, product: ProductData) {
        self.state().products.insert(product.barcode.clone(), product);
    }

    pub fn lookups(&self) -> usize {
        self.state().lookups
    }
}

impl ProductCatalog for FakeCatalog {
    async fn find_product(&self, barcode: DecodedBarcode) -> Result<Option<ProductData>, CoreError> {
        let mut state = self.state();
        state.lookups += 1;
        Ok(state.products.get(&barcode.text).cloned())
    }
}
