use serde::Serialize;
use reqwest::{Client, ClientBuilder, StatusCode};
use crate::config::Config;
use crate::error::{Result, AppError};

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes articles concisely and accurately.";

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ProviderPreferences {
    allow_fallbacks: bool,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    provider: ProviderPreferences,
}

fn chat_request(model: &str, prompt: &str) -> ChatRequest {
    ChatRequest {
        model: model.into(),
        messages: vec![
            Message {
                role: "system".into(),
                content: SYSTEM_PROMPT.into(),
            },
            Message {
                role: "user".into(),
                content: prompt.into(),
            },
        ],
        provider: ProviderPreferences { allow_fallbacks: true },
    }
}

/// Chat-completion client for the OpenRouter API.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    url: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.summary_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.openrouter_api_key.clone(),
            url: config.openrouter_url.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` as the user turn and returns the first choice's content verbatim.
    pub async fn summarize(&self, prompt: &str) -> Result<String> {
        let body = chat_request(&self.model, prompt);

        let res = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Unexpected(e.to_string()))?;

        let status = res.status();
        if status != StatusCode::OK {
            let detail = res.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %detail, "summarization service rejected request");
            return Err(AppError::SummarizationService(status));
        }

        let json: serde_json::Value = res
            .json()
            .await
            .map_err(|e| AppError::Unexpected(format!("Invalid JSON from AI service: {}", e)))?;
        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AppError::Unexpected("Invalid response format from AI service".to_string()))?
            .to_string();

        Ok(reply)
    }
}
