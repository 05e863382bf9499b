/// Sampling options forwarded to the chat-completion endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl CompletionOptions {
    pub fn deterministic() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: None,
        }
    }
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self::deterministic()
    }
}

/// An image sent inline to a vision model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl InlineImage {
    pub fn jpeg(data: Vec<u8>) -> Self {
        Self {
            data,
            mime_type: "image/jpeg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedDocument {
    pub text: String,
    pub score: f32,
}
