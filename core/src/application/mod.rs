use crate::{
    domain::common::{DongoPetConfig, services::{Service, ServiceSettings}},
    infrastructure::{
        barcode::rxing_decoder::RxingBarcodeDecoder,
        crypto::argon2_hasher::Argon2HasherRepository,
        db::postgres::Postgres,
        food_scan::repositories::food_scan_repository::PostgresFoodScanResultRepository,
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        jwt::jwt_repository::JwtTokenRepository,
        lesson::repositories::{
            lesson_repository::PostgresLessonRepository,
            progress_lesson_repository::PostgresProgressLessonRepository,
        },
        llm::openai_client::OpenAILLMClient,
        pet::repositories::pet_repository::PostgresPetRepository,
        pet_health::repositories::{
            allergy_repository::PostgresAllergyRepository,
            insurance_repository::PostgresInsuranceRepository,
            medical_condition_repository::PostgresMedicalConditionRepository,
            medication_repository::PostgresMedicationRepository,
            vaccination_repository::PostgresVaccinationRepository,
        },
        product_catalog::open_pet_food_facts::OpenPetFoodFactsCatalog,
        reminder::repositories::reminder_repository::PostgresReminderRepository,
        user::repositories::user_repository::PostgresUserRepository,
        vector_store::pinecone::PineconeVectorStore,
    },
};

pub type DongoPetService = Service<
    PostgresUserRepository,
    Argon2HasherRepository,
    JwtTokenRepository,
    PostgresPetRepository,
    PostgresReminderRepository,
    PostgresVaccinationRepository,
    PostgresAllergyRepository,
    PostgresInsuranceRepository,
    PostgresMedicalConditionRepository,
    PostgresMedicationRepository,
    PostgresLessonRepository,
    PostgresProgressLessonRepository,
    PostgresFoodScanResultRepository,
    OpenAILLMClient,
    PineconeVectorStore,
    OpenPetFoodFactsCatalog,
    RxingBarcodeDecoder,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: DongoPetConfig) -> Result<DongoPetService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        JwtTokenRepository::new(
            config.auth.secret_key.clone(),
            config.auth.access_token_expire_minutes,
        ),
        PostgresPetRepository::new(db.clone()),
        PostgresReminderRepository::new(db.clone()),
        PostgresVaccinationRepository::new(db.clone()),
        PostgresAllergyRepository::new(db.clone()),
        PostgresInsuranceRepository::new(db.clone()),
        PostgresMedicalConditionRepository::new(db.clone()),
        PostgresMedicationRepository::new(db.clone()),
        PostgresLessonRepository::new(db.clone()),
        PostgresProgressLessonRepository::new(db.clone()),
        PostgresFoodScanResultRepository::new(db.clone()),
        OpenAILLMClient::new(&config.llm),
        PineconeVectorStore::new(&config.vector_store),
        OpenPetFoodFactsCatalog::new(config.barcode.product_api_base_url.clone())?,
        RxingBarcodeDecoder::new(),
        PostgresHealthCheckRepository::new(db),
        ServiceSettings {
            barcode_strategy: config.barcode.strategy,
        },
    ))
}
