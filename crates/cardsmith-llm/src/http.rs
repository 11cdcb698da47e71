//! HTTP transport for OpenAI-compatible endpoints
//!
//! # Features
//!
//! - Async HTTP via `reqwest`
//! - Headers, URL and credentials come from a resolved [`EndpointTarget`]
//! - Optional request timeout (none by default)
//!
//! No retries are attempted; a failed call surfaces immediately.

use crate::chat::ChatRequest;
use crate::endpoint::EndpointTarget;
use crate::{ChatClient, LlmError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Chat client that issues real HTTP requests
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpChatClient {
    /// Create a client without a request timeout
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: None,
        }
    }

    /// Abort requests that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for HttpChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn send(
        &self,
        target: &EndpointTarget,
        request: &ChatRequest,
    ) -> Result<String, LlmError> {
        let transport_error = |e: reqwest::Error| LlmError::Transport {
            url: target.url.clone(),
            message: e.to_string(),
        };

        // Headers first so the JSON body does not add a second Content-Type
        let mut builder = self.client.post(&target.url);
        for (name, value) in &target.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = builder.json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        debug!("POST {} (model {})", target.url, request.model);

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        debug!("Response status {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
