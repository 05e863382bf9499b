use crate::domain::{
    barcode::ports::{BarcodeDecoder, ProductCatalog},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    food_scan::ports::FoodScanResultRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    jwt::ports::TokenRepository,
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

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> HealthCheckService
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
