//! LLM endpoint configuration

use serde::{Deserialize, Serialize};

/// Default inference server (LMStudio's OpenAI-compatible API)
pub const DEFAULT_BASE_URL: &str = "http://localhost:1234/v1";

/// Default model name
pub const DEFAULT_MODEL: &str = "llama-3.2-1b-instruct";

/// Address of the local CORS-avoidance proxy
pub const DEFAULT_PROXY_URL: &str = "http://localhost:3001/api/v1";

/// Environment variable holding the inference server URL
pub const ENV_BASE_URL: &str = "INFERENCE_SERVER_URL";
/// Environment variable holding the model name
pub const ENV_MODEL: &str = "MODEL_NAME";
/// Environment variable holding the default API key
pub const ENV_API_KEY: &str = "LLM_API_KEY";
/// Environment variable overriding the proxy address
pub const ENV_PROXY_URL: &str = "CARDSMITH_PROXY_URL";

/// Where and how to call the completion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API (e.g. `https://api.openai.com/v1`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// API key used when the caller does not supply one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_api_key: Option<String>,

    /// Local proxy that fronts locally hosted inference servers
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            default_api_key: None,
            proxy_url: default_proxy_url(),
        }
    }
}

impl LlmConfig {
    /// Read configuration from the process environment
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// # Examples
    ///
    /// ```
    /// use cardsmith_llm::LlmConfig;
    ///
    /// let config = LlmConfig::from_lookup(|name| match name {
    ///     "MODEL_NAME" => Some("gpt-4o-mini".to_string()),
    ///     "LLM_API_KEY" => Some("  ".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.model, "gpt-4o-mini");
    /// assert_eq!(config.default_api_key, None);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_blank(ENV_BASE_URL).unwrap_or_else(default_base_url),
            model: non_blank(ENV_MODEL).unwrap_or_else(default_model),
            default_api_key: non_blank(ENV_API_KEY),
            proxy_url: non_blank(ENV_PROXY_URL).unwrap_or_else(default_proxy_url),
        }
    }

    /// Overlay environment variables that are set and non-blank
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Overlay values from `lookup` that are set and non-blank
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = non_blank(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(model) = non_blank(ENV_MODEL) {
            self.model = model;
        }
        if let Some(key) = non_blank(ENV_API_KEY) {
            self.default_api_key = Some(key);
        }
        if let Some(proxy_url) = non_blank(ENV_PROXY_URL) {
            self.proxy_url = proxy_url;
        }
        self
    }

    /// The default API key, treating a blank key as absent
    pub fn api_key(&self) -> Option<&str> {
        self.default_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Supplies the configuration for each extraction call
///
/// Configuration may change between calls, so consumers ask for it every
/// time instead of caching it.
pub trait ConfigSource: Send + Sync {
    /// Current configuration
    fn llm_config(&self) -> LlmConfig;
}

impl ConfigSource for LlmConfig {
    fn llm_config(&self) -> LlmConfig {
        self.clone()
    }
}

/// Re-reads the process environment on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl ConfigSource for EnvConfig {
    fn llm_config(&self) -> LlmConfig {
        LlmConfig::from_env()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_proxy_url() -> String {
    DEFAULT_PROXY_URL.to_string()
}
