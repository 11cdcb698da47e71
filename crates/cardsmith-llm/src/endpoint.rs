//! Endpoint resolution: direct call vs. local proxy
//!
//! Locally hosted inference servers (LMStudio and friends) do not answer
//! cross-origin calls, so requests aimed at `localhost`/`127.0.0.1` go
//! through the local proxy instead. Remote APIs are called directly.

use crate::config::LlmConfig;
use url::Url;

/// Credential sent to the proxy when no key is configured
pub const PLACEHOLDER_API_KEY: &str = "not-needed";

/// Header asking the proxy for its canned payload
pub const MOCK_HEADER: &str = "X-Use-Mock";

/// Query string asking the proxy for its canned payload
pub const MOCK_QUERY: &str = "mock=true";

/// Path appended to the resolved base URL
pub const COMPLETIONS_PATH: &str = "/chat/completions";

/// How a request reaches the inference server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Straight to the configured base URL
    Direct,
    /// Through the local proxy
    Proxied,
}

/// Fully resolved request target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTarget {
    /// Complete completions URL, including the mock query when requested
    pub url: String,
    /// Request headers, in insertion order
    pub headers: Vec<(String, String)>,
    /// Whether mock mode was requested
    pub uses_mock: bool,
    /// Direct or proxied
    pub route: Route,
    /// The effective API key, if any
    pub api_key: Option<String>,
}

impl EndpointTarget {
    /// Value of a header, matched case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Whether `base_url` points at this machine
///
/// Unparseable URLs are treated as remote.
pub fn is_local_endpoint(base_url: &str) -> bool {
    Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .map(|host| host == "localhost" || host == "127.0.0.1")
        .unwrap_or(false)
}

/// Decide URL, headers and credentials for one extraction call
///
/// Key precedence: `explicit_key` > configured default > placeholder (only
/// when proxied). Blank keys count as absent. Nothing is cached; call this
/// per request.
///
/// # Examples
///
/// ```
/// use cardsmith_llm::{resolve_endpoint, LlmConfig, Route};
///
/// let config = LlmConfig {
///     base_url: "https://api.openai.com/v1".to_string(),
///     ..LlmConfig::default()
/// };
/// let target = resolve_endpoint(&config, Some("sk-test"), false);
/// assert_eq!(target.route, Route::Direct);
/// assert_eq!(target.url, "https://api.openai.com/v1/chat/completions");
/// assert_eq!(target.header("authorization"), Some("Bearer sk-test"));
/// ```
pub fn resolve_endpoint(
    config: &LlmConfig,
    explicit_key: Option<&str>,
    use_mock: bool,
) -> EndpointTarget {
    let route = if is_local_endpoint(&config.base_url) {
        Route::Proxied
    } else {
        Route::Direct
    };

    let api_key = explicit_key
        .filter(|key| !key.trim().is_empty())
        .or_else(|| config.api_key())
        .map(str::to_string)
        .or_else(|| (route == Route::Proxied).then(|| PLACEHOLDER_API_KEY.to_string()));

    let base = match route {
        Route::Direct => config.base_url.as_str(),
        Route::Proxied => config.proxy_url.as_str(),
    };

    let mut url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
    if use_mock {
        url.push('?');
        url.push_str(MOCK_QUERY);
    }

    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    if let Some(key) = &api_key {
        headers.push(("Authorization".to_string(), format!("Bearer {}", key)));
    }
    if use_mock {
        headers.push((MOCK_HEADER.to_string(), "true".to_string()));
    }

    EndpointTarget {
        url,
        headers,
        uses_mock: use_mock,
        route,
        api_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, key: Option<&str>) -> LlmConfig {
        LlmConfig {
            base_url: base_url.to_string(),
            default_api_key: key.map(str::to_string),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn test_local_hosts_detected() {
        assert!(is_local_endpoint("http://localhost:1234"));
        assert!(is_local_endpoint("http://LOCALHOST:1234/v1"));
        assert!(is_local_endpoint("http://127.0.0.1:8080/v1"));
        assert!(!is_local_endpoint("https://api.openai.com/v1"));
        assert!(!is_local_endpoint("http://192.168.1.10:1234/v1"));
        assert!(!is_local_endpoint("not a url"));
    }

    #[test]
    fn test_localhost_routes_through_proxy() {
        let target = resolve_endpoint(&config("http://localhost:1234", None), None, false);
        assert_eq!(target.route, Route::Proxied);
        assert_eq!(target.url, "http://localhost:3001/api/v1/chat/completions");
        assert_eq!(target.header("Authorization"), Some("Bearer not-needed"));
        assert_eq!(target.api_key.as_deref(), Some(PLACEHOLDER_API_KEY));
    }

    #[test]
    fn test_remote_is_called_directly() {
        let remote = config("https://api.openai.com/v1", Some("sk-default"));
        let target = resolve_endpoint(&remote, None, false);
        assert_eq!(target.route, Route::Direct);
        assert_eq!(target.url, "https://api.openai.com/v1/chat/completions");
        assert_eq!(target.header("Authorization"), Some("Bearer sk-default"));
    }

    #[test]
    fn test_remote_without_key_has_no_auth_header() {
        let target = resolve_endpoint(&config("https://api.openai.com/v1", None), None, false);
        assert_eq!(target.api_key, None);
        assert_eq!(target.header("Authorization"), None);
        assert_eq!(target.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_explicit_key_wins() {
        let local = config("http://localhost:1234/v1", Some("default"));
        let target = resolve_endpoint(&local, Some("explicit"), false);
        assert_eq!(target.api_key.as_deref(), Some("explicit"));

        let target = resolve_endpoint(&local, Some(""), false);
        assert_eq!(target.api_key.as_deref(), Some("default"));
    }

    #[test]
    fn test_mock_mode_adds_query_and_header() {
        let target = resolve_endpoint(&config("http://localhost:1234/v1", None), None, true);
        assert!(target.uses_mock);
        assert_eq!(target.url, "http://localhost:3001/api/v1/chat/completions?mock=true");
        assert_eq!(target.header("x-use-mock"), Some("true"));

        let target = resolve_endpoint(&config("http://localhost:1234/v1", None), None, false);
        assert!(!target.uses_mock);
        assert_eq!(target.header(MOCK_HEADER), None);
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let target =
            resolve_endpoint(&config("https://api.example.com/v1/", Some("k")), None, false);
        assert_eq!(target.url, "https://api.example.com/v1/chat/completions");
    }

    #[test]
    fn test_custom_proxy_address() {
        let mut cfg = config("http://127.0.0.1:1234/v1", None);
        cfg.proxy_url = "http://127.0.0.1:9999/api/v1".to_string();
        let target = resolve_endpoint(&cfg, None, false);
        assert_eq!(target.url, "http://127.0.0.1:9999/api/v1/chat/completions");
    }
}
