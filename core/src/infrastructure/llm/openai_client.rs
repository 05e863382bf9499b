use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    llm::{
        ports::LLMClient,
        value_objects::{CompletionOptions, InlineImage},
    },
};

/// Client for any OpenAI-compatible `/chat/completions` and `/embeddings` API.
#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: String,
    model_name: String,
    embedding_model: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    model: String,
    input: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAILLMClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model_name: config.model_name.clone(),
            embedding_model: config.embedding_model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn completion_request(
        &self,
        system_prompt: String,
        user_content: MessageContent,
        options: CompletionOptions,
    ) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model_name.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(system_prompt),
                },
                Message {
                    role: "user",
                    content: user_content,
                },
            ],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        }
    }

    async fn post<Req: Serialize, Res: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Res, CoreError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("LLM API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("LLM API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        response.json::<Res>().await.map_err(|e| {
            error!("Failed to parse LLM response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }

    async fn complete(&self, request: ChatCompletionRequest) -> Result<String, CoreError> {
        let response: ChatCompletionResponse = self.post("chat/completions", &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

fn data_url(image: &InlineImage) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type,
        general_purpose::STANDARD.encode(&image.data)
    )
}

impl LLMClient for OpenAILLMClient {
    async fn generate_with_text(
        &self,
        system_prompt: String,
        user_prompt: String,
        options: CompletionOptions,
    ) -> Result<String, CoreError> {
        let request =
            self.completion_request(system_prompt, MessageContent::Text(user_prompt), options);

        self.complete(request).await
    }

    async fn generate_with_image(
        &self,
        system_prompt: String,
        user_prompt: String,
        image: InlineImage,
        options: CompletionOptions,
    ) -> Result<String, CoreError> {
        let content = MessageContent::Parts(vec![
            ContentPart::Text { text: user_prompt },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: data_url(&image),
                },
            },
        ]);
        let request = self.completion_request(system_prompt, content, options);

        self.complete(request).await
    }

    async fn embed(&self, text: String) -> Result<Vec<f32>, CoreError> {
        let request = EmbeddingRequest {
            model: self.embedding_model.clone(),
            input: text,
        };
        let response: EmbeddingResponse = self.post("embeddings", &request).await?;

        response
            .data
            .into_iter()
            .next()
            .map(|data| data.embedding)
            .ok_or_else(|| CoreError::ExternalServiceError("No embedding returned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn client() -> OpenAILLMClient {
        OpenAILLMClient::new(&LLMConfig {
            api_key: "key".to_string(),
            model_name: "gpt-4o".to_string(),
            embedding_model: "text-embedding-ada-002".to_string(),
            base_url: "https://api.openai.com/v1/".to_string(),
        })
    }

    #[test]
    fn image_request_carries_a_data_url_and_sampling_options() {
        let content = MessageContent::Parts(vec![
            ContentPart::Text {
                text: "what is this".to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: data_url(&InlineImage::jpeg(vec![1, 2, 3])),
                },
            },
        ]);
        let request = client().completion_request(
            "system".to_string(),
            content,
            CompletionOptions {
                temperature: 0.5,
                max_tokens: Some(200),
            },
        );

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-4o",
                "messages": [
                    {"role": "system", "content": "system"},
                    {"role": "user", "content": [
                        {"type": "text", "text": "what is this"},
                        {"type": "image_url", "image_url": {"url": "data:image/jpeg;base64,AQID"}}
                    ]}
                ],
                "temperature": 0.5,
                "max_tokens": 200
            })
        );
    }

    #[test]
    fn deterministic_request_omits_max_tokens() {
        let request = client().completion_request(
            "system".to_string(),
            MessageContent::Text("hi".to_string()),
            CompletionOptions::deterministic(),
        );

        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("max_tokens").is_none());
        assert_eq!(body["temperature"], json!(0.0));
    }

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        assert_eq!(client().base_url, "https://api.openai.com/v1");
    }
}
