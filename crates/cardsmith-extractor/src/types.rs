//! Request types for extraction

use url::Url;

/// Source descriptor for pasted text
pub const CUSTOM_TEXT_SOURCE: &str = "Custom text";

/// Title given to card sets extracted from pasted text
pub const CUSTOM_TEXT_TITLE: &str = "Custom Text Flashcards";

/// Title used when an article URL has no usable last path segment
pub const FALLBACK_ARTICLE_TITLE: &str = "Wikipedia Article";

/// Where the extracted content came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Text fetched from an article URL
    Url(String),
    /// Text pasted by the user
    CustomText,
}

impl ContentSource {
    /// Title for the resulting card set
    ///
    /// For URLs this is the last path segment with underscores turned into
    /// spaces (`.../wiki/Alan_Turing` → `Alan Turing`).
    pub fn title(&self) -> String {
        match self {
            ContentSource::CustomText => CUSTOM_TEXT_TITLE.to_string(),
            ContentSource::Url(url) => Url::parse(url)
                .ok()
                .and_then(|parsed| {
                    parsed
                        .path_segments()
                        .and_then(|mut segments| segments.next_back().map(str::to_string))
                })
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.replace('_', " "))
                .unwrap_or_else(|| FALLBACK_ARTICLE_TITLE.to_string()),
        }
    }

    /// Source descriptor stored on the card set
    pub fn descriptor(&self) -> &str {
        match self {
            ContentSource::Url(url) => url,
            ContentSource::CustomText => CUSTOM_TEXT_SOURCE,
        }
    }
}

/// Request to extract a card set from content
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Text to extract cards from
    pub content: String,

    /// Where the text came from
    pub source: ContentSource,

    /// Explicit API key; wins over the configured default
    pub api_key: Option<String>,

    /// Ask the proxy for its canned payload instead of a real completion
    pub use_mock: bool,
}

impl ExtractionRequest {
    /// Request for pasted text
    pub fn custom_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: ContentSource::CustomText,
            api_key: None,
            use_mock: false,
        }
    }

    /// Request for text fetched from `url`
    pub fn from_url(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: ContentSource::Url(url.into()),
            api_key: None,
            use_mock: false,
        }
    }

    /// Use an explicit API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Enable or disable mock mode
    pub fn with_mock(mut self, use_mock: bool) -> Self {
        self.use_mock = use_mock;
        self
    }
}
