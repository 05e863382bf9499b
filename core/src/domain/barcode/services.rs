use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{
    authentication::value_objects::Identity,
    barcode::{
        entities::{BarcodeScan, DecodedBarcode, ProductData},
        ports::{BarcodeDecoder, BarcodeService, ProductCatalog},
        prompts::{PRODUCT_SYSTEM_PROMPT, product_user_prompt},
        value_objects::BarcodeStrategy,
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    food_scan::{ports::FoodScanResultRepository, services::validate_image},
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    lesson::ports::{LessonRepository, ProgressLessonRepository},
    llm::{
        ports::{LLMClient, VectorStore},
        recovery::recover_json_object,
        value_objects::CompletionOptions,
    },
    pet::ports::PetRepository,
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
    LLM: LLMClient,
    PC: ProductCatalog,
{
    async fn lookup_product(&self, barcode: DecodedBarcode) -> Result<ProductData, CoreError> {
        let code = barcode.text.clone();

        self.product_catalog
            .find_product(barcode)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Product not found for barcode: {code}")))
    }

    async fn generate_product(&self, barcode: DecodedBarcode) -> Result<ProductData, CoreError> {
        let raw = self
            .llm_client
            .generate_with_text(
                PRODUCT_SYSTEM_PROMPT.to_string(),
                product_user_prompt(&barcode),
                CompletionOptions::deterministic(),
            )
            .await?;
        let fields = recover_json_object(&raw)?;

        Ok(ProductData::from_generated(&barcode, &fields))
    }
}

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> BarcodeService
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
    BD: BarcodeDecoder + 'static,
    HC: HealthCheckRepository,
{
    async fn scan_barcode(&self, identity: Identity, image: Vec<u8>) -> Result<BarcodeScan, CoreError> {
        validate_image(&image)?;

        let decoder = Arc::clone(&self.barcode_decoder);
        let barcode = tokio::task::spawn_blocking(move || decoder.decode(&image))
            .await
            .map_err(|e| {
                error!("Barcode decoding task failed: {}", e);
                CoreError::InternalServerError
            })??
            .ok_or_else(|| CoreError::NotFound("No barcode detected in the image".to_string()))?;

        info!(
            user_id = %identity.id(),
            barcode = %barcode.text,
            symbology = %barcode.symbology,
            "barcode detected"
        );

        let product = match self.settings.barcode_strategy {
            BarcodeStrategy::ProductDatabase => self.lookup_product(barcode).await?,
            BarcodeStrategy::ModelGenerated => self.generate_product(barcode).await?,
        };

        Ok(BarcodeScan::scanned(product))
    }
}
