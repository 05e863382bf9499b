use crate::domain::{
    authentication::value_objects::Identity, chat::value_objects::RagChatInput,
    common::entities::app_errors::CoreError,
};

pub trait ChatService: Send + Sync {
    fn get_text_response(
        &self,
        identity: Identity,
        message: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Answers from the top matching documents of the vector store.
    fn get_rag_response(
        &self,
        identity: Identity,
        input: RagChatInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
