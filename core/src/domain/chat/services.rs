use tracing::debug;

use crate::domain::{
    authentication::value_objects::Identity,
    barcode::ports::{BarcodeDecoder, ProductCatalog},
    chat::{
        ports::ChatService,
        prompts::{CHAT_ASSISTANT_SYSTEM_PROMPT, rag_system_prompt},
        value_objects::{RAG_TOP_K, RagChatInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    food_scan::ports::FoodScanResultRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    lesson::ports::{LessonRepository, ProgressLessonRepository},
    llm::{
        ports::{LLMClient, VectorStore},
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

fn ensure_message(message: &str) -> Result<(), CoreError> {
    if message.trim().is_empty() {
        return Err(CoreError::Invalid("Message must not be empty".to_string()));
    }
    Ok(())
}

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> ChatService
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
    async fn get_text_response(&self, identity: Identity, message: String) -> Result<String, CoreError> {
        ensure_message(&message)?;
        debug!(user_id = %identity.id(), "chat completion requested");

        self.llm_client
            .generate_with_text(
                CHAT_ASSISTANT_SYSTEM_PROMPT.to_string(),
                message,
                CompletionOptions::deterministic(),
            )
            .await
    }

    async fn get_rag_response(&self, identity: Identity, input: RagChatInput) -> Result<String, CoreError> {
        ensure_message(&input.message)?;

        let embedding = self.llm_client.embed(input.message.clone()).await?;
        let documents = self.vector_store.query(embedding, RAG_TOP_K).await?;
        debug!(
            user_id = %identity.id(),
            matches = documents.len(),
            "retrieved context for chat"
        );

        let retrieved_context = documents
            .iter()
            .map(|document| document.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        self.llm_client
            .generate_with_text(
                rag_system_prompt(&input.context_prefix, &retrieved_context),
                input.message,
                CompletionOptions {
                    temperature: input.temperature,
                    max_tokens: Some(input.max_tokens),
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::llm::value_objects::RetrievedDocument, test_support::TestContext};

    #[tokio::test]
    async fn plain_chat_is_deterministic() {
        let ctx = TestContext::new();
        let user = ctx.identity("chatter@example.com", false).await;
        ctx.llm.reply_with("Feed adult dogs twice a day.");

        let answer = ctx
            .service
            .get_text_response(user, "How often should I feed my dog?".to_string())
            .await
            .unwrap();

        assert_eq!(answer, "Feed adult dogs twice a day.");
        assert_eq!(ctx.llm.last_options(), Some(CompletionOptions::deterministic()));
        assert_eq!(ctx.llm.last_system_prompt(), CHAT_ASSISTANT_SYSTEM_PROMPT);
    }

    #[tokio::test]
    async fn rag_chat_joins_the_retrieved_documents() {
        let ctx = TestContext::new();
        let user = ctx.identity("chatter@example.com", false).await;
        ctx.vector_store.add(RetrievedDocument {
            text: "Chocolate is toxic to dogs.".to_string(),
            score: 0.92,
        });
        ctx.vector_store.add(RetrievedDocument {
            text: "Grapes can cause kidney failure.".to_string(),
            score: 0.81,
        });
        ctx.llm.reply_with("Keep chocolate away from your dog.");

        let answer = ctx
            .service
            .get_rag_response(
                user,
                RagChatInput::new("Can dogs eat chocolate?".to_string(), None, None, None),
            )
            .await
            .unwrap();

        assert_eq!(answer, "Keep chocolate away from your dog.");
        assert_eq!(ctx.vector_store.last_top_k(), Some(RAG_TOP_K));
        let prompt = ctx.llm.last_system_prompt();
        assert!(prompt.contains("Chocolate is toxic to dogs.\n\nGrapes can cause kidney failure."));
        assert_eq!(
            ctx.llm.last_options(),
            Some(CompletionOptions {
                temperature: 0.7,
                max_tokens: Some(1000),
            })
        );
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let ctx = TestContext::new();
        let user = ctx.identity("chatter@example.com", false).await;

        let result = ctx.service.get_text_response(user, "   ".to_string()).await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
        assert_eq!(ctx.llm.calls(), 0);
    }
}
