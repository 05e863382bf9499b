use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{
    common::{VectorStoreConfig, entities::app_errors::CoreError},
    llm::{ports::VectorStore, value_objects::RetrievedDocument},
};

#[derive(Debug, Clone)]
pub struct PineconeVectorStore {
    api_key: String,
    index_host: String,
    namespace: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: Vec<f32>,
    top_k: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    namespace: &'a str,
    include_metadata: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Debug, Deserialize)]
struct QueryMatch {
    #[serde(default)]
    score: f32,
    metadata: Option<MatchMetadata>,
}

#[derive(Debug, Deserialize)]
struct MatchMetadata {
    text: Option<String>,
}

impl PineconeVectorStore {
    pub fn new(config: &VectorStoreConfig) -> Self {
        let host = config.index_host.trim_end_matches('/');
        let index_host = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };

        Self {
            api_key: config.api_key.clone(),
            index_host,
            namespace: config.namespace.clone(),
            client: Client::new(),
        }
    }
}

fn into_documents(response: QueryResponse) -> Vec<RetrievedDocument> {
    response
        .matches
        .into_iter()
        .filter_map(|m| {
            let text = m.metadata?.text?;
            Some(RetrievedDocument {
                text,
                score: m.score,
            })
        })
        .collect()
}

impl VectorStore for PineconeVectorStore {
    async fn query(&self, vector: Vec<f32>, top_k: u32) -> Result<Vec<RetrievedDocument>, CoreError> {
        let request = QueryRequest {
            vector,
            top_k,
            namespace: &self.namespace,
            include_metadata: true,
        };

        let response = self
            .client
            .post(format!("{}/query", self.index_host))
            .header("Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Vector store request failed: {}", e);
                CoreError::ExternalServiceError(format!("Vector store error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("Vector store returned error: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "Vector store returned error: {}",
                status
            )));
        }

        let body: QueryResponse = response.json().await.map_err(|e| {
            error!("Failed to parse vector store response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse vector store response: {}", e))
        })?;

        Ok(into_documents(body))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn matches_without_text_metadata_are_skipped() {
        let response: QueryResponse = serde_json::from_value(json!({
            "matches": [
                {"id": "a", "score": 0.9, "metadata": {"text": "Dogs need daily walks."}},
                {"id": "b", "score": 0.8},
                {"id": "c", "score": 0.7, "metadata": {"source": "faq"}}
            ]
        }))
        .unwrap();

        let documents = into_documents(response);

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].text, "Dogs need daily walks.");
    }

    #[test]
    fn query_body_uses_camel_case_and_skips_empty_namespace() {
        let request = QueryRequest {
            vector: vec![0.5],
            top_k: 4,
            namespace: "",
            include_metadata: true,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"vector": [0.5], "topK": 4, "includeMetadata": true})
        );
    }

    #[test]
    fn bare_index_host_gets_https_scheme() {
        let store = PineconeVectorStore::new(&VectorStoreConfig {
            api_key: "k".to_string(),
            index_host: "pets-abc.svc.pinecone.io/".to_string(),
            namespace: String::new(),
        });

        assert_eq!(store.index_host, "https://pets-abc.svc.pinecone.io");
    }
}
