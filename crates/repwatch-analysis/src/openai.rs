//! [`TextGenerator`] backed by an OpenAI-compatible chat completions endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::drafter::{GenerationFuture, TextGenerator};
use crate::error::GenerationError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str =
    "You write concise, helpful public support responses for brand social media.";
const MAX_TOKENS: u32 = 120;
const TEMPERATURE: f32 = 0.2;

/// Chat-completions client. Cheap to clone; the underlying `reqwest::Client` is shared.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl std::fmt::Debug for OpenAiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGenerator")
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

/// Newer APIs return `message.content`; legacy completions return `text`.
#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiGenerator {
    /// Client pointed at the public OpenAI API.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Http`] if the HTTP client cannot be built.
    pub fn new(api_key: &str, model: &str, timeout: Duration) -> Result<Self, GenerationError> {
        Self::with_base_url(api_key, model, timeout, DEFAULT_BASE_URL)
    }

    /// Client pointed at any OpenAI-compatible base URL (a mock server in tests).
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NotConfigured`] for a blank API key, or
    /// [`GenerationError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout: Duration,
        base_url: &str,
    ) -> Result<Self, GenerationError> {
        if api_key.trim().is_empty() {
            return Err(GenerationError::NotConfigured);
        }
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .user_agent("repwatch/0.1 (reply-drafting)")
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        extract_text(parsed).ok_or(GenerationError::EmptyResponse)
    }
}

fn extract_text(response: ChatResponse) -> Option<String> {
    let first = response.choices.into_iter().next()?;
    first
        .message
        .and_then(|m| m.content)
        .or(first.text)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

impl TextGenerator for OpenAiGenerator {
    fn draft<'a>(&'a self, prompt: &'a str) -> GenerationFuture<'a> {
        Box::pin(self.complete(prompt))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
