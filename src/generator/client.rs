//! LLM client
//!
//! Thin client for an OpenAI-compatible chat-completions endpoint. One
//! request per generation, no streaming, no retries; the caller decides
//! whether to try again. The response's first choice is parsed into a field
//! list by `descriptor::parse_field_list`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::descriptor::{parse_field_list, FieldDescriptor};
use crate::observability::Logger;

use super::errors::{GeneratorError, GeneratorResult};
use super::prompt::{user_message, SYSTEM_PROMPT};

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Generation settings, part of the top-level config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature. Low by default: form layouts should be boring.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// API key; falls back to the OPENAI_API_KEY environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for one OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    config: GeneratorConfig,
    api_key: String,
}

impl LlmClient {
    /// Build a client from config. The API key comes from the config or the
    /// OPENAI_API_KEY environment variable, in that order.
    pub fn new(config: GeneratorConfig) -> GeneratorResult<Self> {
        let api_key = match config.api_key.clone() {
            Some(key) if !key.is_empty() => key,
            _ => std::env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.is_empty())
                .ok_or(GeneratorError::MissingApiKey(API_KEY_ENV))?,
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("formsmith/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GeneratorError::ClientBuild)?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Generate a field list from a natural-language form description.
    pub async fn generate_fields(
        &self,
        description: &str,
    ) -> GeneratorResult<Vec<FieldDescriptor>> {
        let body = json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": user_message(description)},
            ],
        });

        Logger::info(
            "generator_request",
            &[("model", self.config.model.as_str())],
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GeneratorError::EmptyResponse)?;

        let fields = parse_field_list(&content)?;
        Logger::info(
            "generator_response",
            &[("fields", &fields.len().to_string())],
        );
        Ok(fields)
    }
}
