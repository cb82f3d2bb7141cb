use serde::{Deserialize, Serialize};
use reqwest::Client;
use std::{sync::Arc, time::{Duration, Instant}};
use tokio::sync::Mutex;

/// Default model alias used by the chat surface.
pub const DEFAULT_CHAT_MODEL: &str = "chat-model";

/// A model the chat surface can select. The `id` is an application-level
/// alias; `upstream_id` is what actually goes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedModel {
    pub id: &'static str,
    pub upstream_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Reasoning models wrap their chain of thought in `<think>` tags which
    /// the renderer extracts into a collapsible block.
    pub reasoning: bool,
}

/// The pre-registered model identifiers this layer selects among. Only the
/// chat models are user-selectable; `title-model` and `artifact-model` exist
/// for internal flows.
pub fn model_catalog() -> Vec<NamedModel> {
    vec![
        NamedModel {
            id: "chat-model",
            upstream_id: "google/gemini-2.5-flash",
            name: "Gemini 2.5 Flash",
            description: "Advanced multimodal model with vision and text capabilities",
            reasoning: false,
        },
        NamedModel {
            id: "chat-model-reasoning",
            upstream_id: "google/gemini-2.5-flash",
            name: "Gemini 2.5 Flash Reasoning",
            description: "Uses advanced chain-of-thought reasoning for complex problems",
            reasoning: true,
        },
        NamedModel {
            id: "title-model",
            upstream_id: "google/gemini-2.5-flash",
            name: "Title Model",
            description: "Generates short conversation titles",
            reasoning: false,
        },
        NamedModel {
            id: "artifact-model",
            upstream_id: "google/gemini-2.5-flash",
            name: "Artifact Model",
            description: "Drafts long-form artifacts",
            reasoning: false,
        },
    ]
}

/// Look up a named model by its alias.
pub fn resolve_model(id: &str) -> Option<NamedModel> {
    model_catalog().into_iter().find(|m| m.id == id)
}

#[derive(Debug, Clone)]
pub struct ProviderClient {
    api_key: String,
    client: Client,
    base_url: String,
    last_request_time: Arc<Mutex<Option<Instant>>>,
    min_request_interval: Duration, // Minimum time between requests to avoid rate limiting
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub created: u64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<Usage>,
}

#[derive(Deserialize, Debug)]
pub struct ChatCompletionChoice {
    pub index: usize,
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

// Custom error type for the provider client
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),
}

impl ProviderClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self {
            api_key,
            client,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            last_request_time: Arc::new(Mutex::new(None)),
            min_request_interval: Duration::from_millis(1000), // 1 second minimum between requests
        }
    }

    async fn throttle(&self) {
        let mut last_request_time = self.last_request_time.lock().await;

        if let Some(last_time) = *last_request_time {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_request_interval {
                let wait_time = self.min_request_interval - elapsed;
                tokio::time::sleep(wait_time).await;
            }
        }

        *last_request_time = Some(Instant::now());
    }

    /// Run a chat completion against a named model from the catalog.
    pub async fn chat_completion(
        &self,
        model_id: &str,
        messages: Vec<ChatMessage>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> Result<ChatCompletionResponse, ProviderError> {
        let model = resolve_model(model_id)
            .ok_or_else(|| ProviderError::UnknownModel(model_id.to_string()))?;

        // Throttle requests to avoid rate limiting
        self.throttle().await;

        let request = ChatCompletionRequest {
            model: model.upstream_id.to_string(),
            messages,
            temperature,
            max_tokens,
            stream: Some(false),
        };

        let response = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", "https://serieschat.app") // Identifying the application
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                429 => ProviderError::RateLimitExceeded,
                _ => ProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_exposes_the_named_models() {
        let ids: Vec<&str> = model_catalog().iter().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec!["chat-model", "chat-model-reasoning", "title-model", "artifact-model"]
        );
    }

    #[test]
    fn reasoning_flag_only_on_reasoning_model() {
        assert!(resolve_model("chat-model-reasoning").unwrap().reasoning);
        assert!(!resolve_model("chat-model").unwrap().reasoning);
        assert!(resolve_model("no-such-model").is_none());
    }
}
