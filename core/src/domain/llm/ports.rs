use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::value_objects::{CompletionOptions, InlineImage, RetrievedDocument},
};

/// Chat-completion and embedding model.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        system_prompt: String,
        user_prompt: String,
        options: CompletionOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_image(
        &self,
        system_prompt: String,
        user_prompt: String,
        image: InlineImage,
        options: CompletionOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn embed(&self, text: String) -> impl Future<Output = Result<Vec<f32>, CoreError>> + Send;
}

/// Similarity search over pre-indexed documents.
#[cfg_attr(test, mockall::automock)]
pub trait VectorStore: Send + Sync {
    fn query(
        &self,
        vector: Vec<f32>,
        top_k: u32,
    ) -> impl Future<Output = Result<Vec<RetrievedDocument>, CoreError>> + Send;
}
