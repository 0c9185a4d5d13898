use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f64 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 300;

pub const SYSTEM_PROMPT: &str = "You are an AI assistant designed to help students and staff at Metropolia UAS.
Your role is to help with course materials, lecture notes, and educational questions.
Provide clear, concise, and helpful answers. If the question is outside the scope of the provided text, say so.
Keep responses focused and structured.";

/// The one failure kind callers of a [`ChatModel`] ever see.
#[derive(Debug, Error)]
#[error("API Error: {0}")]
pub struct ModelError(pub String);

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send `prompt` as the user turn and return the trimmed answer.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ModelError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
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

/// Chat-completions client for OpenAI or any host speaking the same API.
pub struct OpenAiChat {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiChat {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChat {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ModelError> {
        let payload = ChatCompletionRequest {
            model: MODEL,
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
            max_tokens,
            temperature: TEMPERATURE,
        };

        tracing::debug!(
            model = MODEL,
            max_tokens,
            prompt_chars = prompt.chars().count(),
            "sending chat completion"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(ModelError(format!("request failed ({status}): {body}")));
        }

        let body: ChatCompletionResponse = response.json().await?;
        extract_answer(body)
    }
}

fn extract_answer(body: ChatCompletionResponse) -> Result<String, ModelError> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| ModelError("response did not contain an answer".to_string()))
}
