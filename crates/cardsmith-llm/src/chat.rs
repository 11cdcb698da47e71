//! OpenAI-compatible chat-completion wire types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sampling temperature sent with every request
pub const TEMPERATURE: f64 = 0.7;

/// Completion token ceiling sent with every request
pub const MAX_TOKENS: u32 = 4000;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions for the model
    System,
    /// End-user content
    User,
    /// Model output
    Assistant,
}

/// One message of a chat prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message author
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// System message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// User message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat/completions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Model name
    pub model: String,
    /// Prompt messages
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f64,
    /// Completion token ceiling
    pub max_tokens: u32,
    /// Streaming is never requested
    pub stream: bool,
}

impl ChatRequest {
    /// Build a non-streaming request with the fixed sampling parameters
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        }
    }
}

/// Response body of a chat completion
///
/// Only the fields Cardsmith reads are modelled; everything is optional so
/// that a malformed body is reported as missing content rather than as a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

/// Generated message
///
/// `content` is normally a string, but some backends (and the mock proxy)
/// hand back an already-decoded JSON object, so it is kept as a raw value.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Message content
    #[serde(default)]
    pub content: Option<Value>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&Value> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_ref())
    }
}
