//! Cardsmith LLM Layer
//!
//! Talks to OpenAI-compatible chat-completion endpoints (OpenAI, LMStudio,
//! or anything fronted by the local CORS-avoidance proxy).
//!
//! # Architecture
//!
//! - [`LlmConfig`] / [`ConfigSource`]: where to send requests and with which model
//! - [`resolve_endpoint`]: pure decision between a direct call and a call routed
//!   through the local proxy, including auth and mock-mode headers
//! - [`ChatClient`]: transport seam; [`HttpChatClient`] issues real requests,
//!   [`MockChatClient`] returns canned bodies for tests
//!
//! # Examples
//!
//! ```
//! use cardsmith_llm::{resolve_endpoint, LlmConfig, Route};
//!
//! let config = LlmConfig::default();
//! let target = resolve_endpoint(&config, None, false);
//! assert_eq!(target.route, Route::Proxied);
//! assert_eq!(target.url, "http://localhost:3001/api/v1/chat/completions");
//! ```

#![warn(missing_docs)]

pub mod chat;
pub mod config;
pub mod endpoint;
pub mod http;

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use chat::{ChatChoice, ChatCompletionResponse, ChatMessage, ChatRequest, ResponseMessage, Role};
pub use config::{ConfigSource, EnvConfig, LlmConfig};
pub use endpoint::{resolve_endpoint, EndpointTarget, Route};
pub use http::HttpChatClient;

/// Errors that can occur while talking to a completion endpoint
#[derive(Error, Debug)]
pub enum LlmError {
    /// The endpoint could not be reached
    #[error("Network error when connecting to {url}: {message}")]
    Transport {
        /// Target URL of the failed request
        url: String,
        /// Underlying transport error text
        message: String,
    },

    /// The endpoint answered with a non-success status
    #[error("API request failed: {status} {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },
}

/// Transport for chat-completion requests
///
/// Implementations send `request` to `target` and return the raw response
/// body of a successful (2xx) response. Interpreting the body is left to the
/// caller.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send one chat-completion request
    async fn send(
        &self,
        target: &EndpointTarget,
        request: &ChatRequest,
    ) -> Result<String, LlmError>;
}

#[async_trait]
impl<C: ChatClient + ?Sized> ChatClient for Arc<C> {
    async fn send(
        &self,
        target: &EndpointTarget,
        request: &ChatRequest,
    ) -> Result<String, LlmError> {
        (**self).send(target, request).await
    }
}

/// What a [`MockChatClient`] answers with
#[derive(Debug, Clone)]
enum MockReply {
    Body(String),
    Status(u16, String),
    Unreachable(String),
}

/// Mock chat client for deterministic testing
///
/// Returns a pre-configured reply without any network calls and records
/// every request it receives.
///
/// # Examples
///
/// ```
/// use cardsmith_llm::{resolve_endpoint, ChatClient, ChatRequest, LlmConfig, MockChatClient};
///
/// # tokio_test_block(async {
/// let client = MockChatClient::new(r#"{"choices":[]}"#);
/// let target = resolve_endpoint(&LlmConfig::default(), None, true);
/// let request = ChatRequest::new("model", Vec::new());
/// assert_eq!(client.send(&target, &request).await.unwrap(), r#"{"choices":[]}"#);
/// assert_eq!(client.call_count(), 1);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockChatClient {
    reply: MockReply,
    calls: Arc<Mutex<Vec<(EndpointTarget, ChatRequest)>>>,
}

impl MockChatClient {
    /// Answer every request with `body` (status 200)
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Body(body.into()))
    }

    /// Answer every request with a chat completion whose message content is `content`
    pub fn with_content(content: impl Into<String>) -> Self {
        let body = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": content.into() } }]
        });
        Self::new(body.to_string())
    }

    /// Answer every request with a non-success status
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Status(status, body.into()))
    }

    /// Fail every request as if the endpoint could not be reached
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Unreachable(message.into()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// The most recent request and the target it was sent to
    pub fn last_call(&self) -> Option<(EndpointTarget, ChatRequest)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).last().cloned()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn send(
        &self,
        target: &EndpointTarget,
        request: &ChatRequest,
    ) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((target.clone(), request.clone()));

        match &self.reply {
            MockReply::Body(body) => Ok(body.clone()),
            MockReply::Status(status, body) => Err(LlmError::Status {
                status: *status,
                body: body.clone(),
            }),
            MockReply::Unreachable(message) => Err(LlmError::Transport {
                url: target.url.clone(),
                message: message.clone(),
            }),
        }
    }
}
