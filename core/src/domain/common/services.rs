use std::sync::Arc;

use crate::domain::barcode::value_objects::BarcodeStrategy;

#[derive(Clone, Debug)]
pub struct ServiceSettings {
    pub barcode_strategy: BarcodeStrategy,
}

/// Application service, generic over every outbound port so the domain never names an adapter.
#[derive(Clone)]
pub struct Service<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> {
    pub(crate) user_repository: U,
    pub(crate) hasher_repository: H,
    pub(crate) token_repository: T,
    pub(crate) pet_repository: P,
    pub(crate) reminder_repository: RM,
    pub(crate) vaccination_repository: VA,
    pub(crate) allergy_repository: AL,
    pub(crate) insurance_repository: IN,
    pub(crate) medical_condition_repository: MC,
    pub(crate) medication_repository: MD,
    pub(crate) lesson_repository: LS,
    pub(crate) progress_lesson_repository: PL,
    pub(crate) food_scan_repository: FS,
    pub(crate) llm_client: LLM,
    pub(crate) vector_store: VS,
    pub(crate) product_catalog: PC,
    /// Shared so decoding can move onto the blocking pool.
    pub(crate) barcode_decoder: Arc<BD>,
    pub(crate) health_check_repository: HC,
    pub(crate) settings: ServiceSettings,
}

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC>
    Service<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC>
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        hasher_repository: H,
        token_repository: T,
        pet_repository: P,
        reminder_repository: RM,
        vaccination_repository: VA,
        allergy_repository: AL,
        insurance_repository: IN,
        medical_condition_repository: MC,
        medication_repository: MD,
        lesson_repository: LS,
        progress_lesson_repository: PL,
        food_scan_repository: FS,
        llm_client: LLM,
        vector_store: VS,
        product_catalog: PC,
        barcode_decoder: BD,
        health_check_repository: HC,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            user_repository,
            hasher_repository,
            token_repository,
            pet_repository,
            reminder_repository,
            vaccination_repository,
            allergy_repository,
            insurance_repository,
            medical_condition_repository,
            medication_repository,
            lesson_repository,
            progress_lesson_repository,
            food_scan_repository,
            llm_client,
            vector_store,
            product_catalog,
            barcode_decoder: Arc::new(barcode_decoder),
            health_check_repository,
            settings,
        }
    }
}
