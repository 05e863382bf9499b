use serde_json::{Map, Value};
use tracing::info;
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
    food_scan::{
        entities::FoodScanResult,
        ports::{FoodScanResultRepository, FoodScanService},
        prompts::{FOOD_ANALYSIS_USER_PROMPT, food_analysis_system_prompt},
        scoring::nutrition_health_score,
        value_objects::{AnalyzeFoodImageInput, MAX_IMAGE_SIZE},
    },
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    lesson::ports::{LessonRepository, ProgressLessonRepository},
    llm::{
        ports::{LLMClient, VectorStore},
        recovery::recover_json_object,
        value_objects::{CompletionOptions, InlineImage},
    },
    pet::ports::PetRepository,
    pet_health::ports::{
        AllergyRepository, InsuranceRepository, MedicalConditionRepository, MedicationRepository,
        VaccinationRepository,
    },
    reminder::ports::ReminderRepository,
    user::ports::UserRepository,
};

/// Fills `hasMultipleItems` and `nutritionHealthScore` when the model left them out.
pub fn enrich_analysis(analysis: &mut Map<String, Value>) {
    let Some(items) = analysis.get("foodItems").and_then(Value::as_array) else {
        return;
    };

    let has_multiple_items = items.len() > 1;
    let score = nutrition_health_score(items);

    analysis
        .entry("hasMultipleItems")
        .or_insert(Value::Bool(has_multiple_items));
    analysis
        .entry("nutritionHealthScore")
        .or_insert(Value::from(score));
}

pub(crate) fn validate_image(image: &[u8]) -> Result<(), CoreError> {
    if image.is_empty() {
        return Err(CoreError::Invalid("Uploaded file is empty".to_string()));
    }
    if image.len() > MAX_IMAGE_SIZE {
        return Err(CoreError::Invalid(
            "Image exceeds the 10 MB upload limit".to_string(),
        ));
    }
    Ok(())
}

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> FoodScanService
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
    async fn get_pet_food_scans(
        &self,
        identity: Identity,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<FoodScanResult>, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.food_scan_repository
            .fetch_food_scans_by_pet(pet.id, pagination)
            .await
    }

    async fn get_pet_food_scan(
        &self,
        identity: Identity,
        pet_id: Uuid,
        result_id: Uuid,
    ) -> Result<FoodScanResult, CoreError> {
        let pet = self.owned_pet(&identity, pet_id).await?;

        self.food_scan_repository
            .get_food_scan_by_id(result_id)
            .await?
            .filter(|result| result.pet_id == pet.id)
            .ok_or_else(|| CoreError::not_found("Food scan result"))
    }

    async fn analyze_food_image(
        &self,
        identity: Identity,
        input: AnalyzeFoodImageInput,
    ) -> Result<Value, CoreError> {
        validate_image(&input.image)?;
        let pet = self.owned_pet(&identity, input.pet_id).await?;

        let raw = self
            .llm_client
            .generate_with_image(
                food_analysis_system_prompt(input.include_portion_estimates),
                FOOD_ANALYSIS_USER_PROMPT.to_string(),
                InlineImage::jpeg(input.image),
                CompletionOptions::deterministic(),
            )
            .await?;

        let mut analysis = recover_json_object(&raw)?;
        enrich_analysis(&mut analysis);

        if let Some(row) = FoodScanResult::from_analysis(pet.id, &analysis) {
            let saved = self.food_scan_repository.create_food_scan(row).await?;
            info!(pet_id = %pet.id, result_id = %saved.id, "food scan result stored");
        }

        Ok(Value::Object(analysis))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

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
                    name: "Bori".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
    }

    fn photo(pet_id: Uuid) -> AnalyzeFoodImageInput {
        AnalyzeFoodImageInput {
            pet_id,
            image: vec![0xFF, 0xD8, 0xFF, 0xE0],
            include_portion_estimates: false,
        }
    }

    #[test]
    fn enrichment_keeps_model_supplied_values() {
        let mut analysis = match json!({
            "foodItems": [{"calories": 100, "protein": 10}, {"calories": 50}],
            "nutritionHealthScore": 12
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        enrich_analysis(&mut analysis);

        assert_eq!(analysis["hasMultipleItems"], json!(true));
        assert_eq!(analysis["nutritionHealthScore"], json!(12));
    }

    #[test]
    fn enrichment_needs_a_food_item_array() {
        let mut analysis = Map::new();
        enrich_analysis(&mut analysis);
        assert!(analysis.is_empty());
    }

    #[tokio::test]
    async fn analysis_is_recovered_scored_and_stored() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let pet = pet_of(&ctx, &owner).await;

        ctx.llm.reply_with(
            r#"Sure! {"foodItems": [{"name": "Salmon", "calories": 200, "protein": 25,
               "petSafety": {"isSafe": true, "safetyMessage": "Cooked fish is fine"}}]}"#,
        );

        let analysis = ctx
            .service
            .analyze_food_image(owner.clone(), photo(pet.id))
            .await
            .unwrap();

        assert_eq!(analysis["hasMultipleItems"], json!(false));
        // 50 + min(100 / 200 * 100, 20)
        assert_eq!(analysis["nutritionHealthScore"], json!(70));

        let stored = ctx
            .service
            .get_pet_food_scans(owner, pet.id, Pagination::default())
            .await
            .unwrap();
        assert_eq!(stored.count, 1);
        assert_eq!(stored.data[0].food_name.as_deref(), Some("Salmon"));
        assert_eq!(stored.data[0].nutrition_health_score, Some(70));
        assert_eq!(stored.data[0].toxic_ingredients.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn empty_detection_is_returned_but_not_stored() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let pet = pet_of(&ctx, &owner).await;
        ctx.llm.reply_with(r#"{"foodItems": []}"#);

        let analysis = ctx
            .service
            .analyze_food_image(owner.clone(), photo(pet.id))
            .await
            .unwrap();
        assert_eq!(analysis["nutritionHealthScore"], json!(50));

        let stored = ctx
            .service
            .get_pet_food_scans(owner, pet.id, Pagination::default())
            .await
            .unwrap();
        assert_eq!(stored.count, 0);
    }

    #[tokio::test]
    async fn prose_only_answer_is_unparsable() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let pet = pet_of(&ctx, &owner).await;
        ctx.llm.reply_with("I am unable to see any food in this picture.");

        let result = ctx.service.analyze_food_image(owner, photo(pet.id)).await;

        assert_eq!(result, Err(CoreError::UnparsableAiResponse));
    }

    #[tokio::test]
    async fn foreign_pet_is_rejected_before_calling_the_model() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let other = ctx.identity("other@example.com", false).await;
        let pet = pet_of(&ctx, &owner).await;

        let result = ctx.service.analyze_food_image(other, photo(pet.id)).await;

        assert_eq!(result, Err(CoreError::PermissionDenied));
        assert_eq!(ctx.llm.calls(), 0);
    }

    #[tokio::test]
    async fn oversized_and_empty_uploads_are_invalid() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let pet = pet_of(&ctx, &owner).await;

        let mut input = photo(pet.id);
        input.image = Vec::new();
        let empty = ctx.service.analyze_food_image(owner.clone(), input).await;
        assert!(matches!(empty, Err(CoreError::Invalid(_))));

        let mut input = photo(pet.id);
        input.image = vec![0; MAX_IMAGE_SIZE + 1];
        let oversized = ctx.service.analyze_food_image(owner, input).await;
        assert!(matches!(oversized, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn scan_of_another_pet_is_not_found() {
        let ctx = TestContext::new();
        let owner = ctx.identity("owner@example.com", false).await;
        let first = pet_of(&ctx, &owner).await;
        let second = pet_of(&ctx, &owner).await;
        ctx.llm.reply_with(r#"{"foodItems": [{"name": "Carrot"}]}"#);
        ctx.service
            .analyze_food_image(owner.clone(), photo(first.id))
            .await
            .unwrap();
        let stored = ctx
            .service
            .get_pet_food_scans(owner.clone(), first.id, Pagination::default())
            .await
            .unwrap();
        let result_id = stored.data[0].id;

        assert!(ctx.service.get_pet_food_scan(owner.clone(), first.id, result_id).await.is_ok());
        assert!(matches!(
            ctx.service.get_pet_food_scan(owner, second.id, result_id).await,
            Err(CoreError::NotFound(_))
        ));
    }
}
