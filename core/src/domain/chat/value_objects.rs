pub const RAG_TOP_K: u32 = 4;
pub const DEFAULT_RAG_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_RAG_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct RagChatInput {
    pub message: String,
    pub context_prefix: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl RagChatInput {
    pub fn new(
        message: String,
        context_prefix: Option<String>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Self {
        Self {
            message,
            context_prefix: context_prefix.unwrap_or_default(),
            max_tokens: max_tokens.unwrap_or(DEFAULT_RAG_MAX_TOKENS),
            temperature: temperature.unwrap_or(DEFAULT_RAG_TEMPERATURE),
        }
    }
}
