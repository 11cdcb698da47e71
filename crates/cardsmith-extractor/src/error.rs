//! Error types for the Extractor

use cardsmith_domain::CardSetError;
use cardsmith_llm::LlmError;
use thiserror::Error;

/// Reasons an extraction can fail
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// No base URL configured
    #[error("API base URL is not configured")]
    MissingBaseUrl,

    /// A direct (non-proxied) call has no API key to send
    #[error("API key is not configured for {0}")]
    MissingApiKey(String),

    /// Nothing to extract from
    #[error("No content provided")]
    EmptyContent,

    /// Transport or HTTP status failure
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Success status but no usable message content
    #[error("No response from LLM API")]
    NoResponse,

    /// Content is not JSON or lacks the `flashcards` array
    #[error("Invalid response format from LLM: {0}")]
    InvalidFormat(String),

    /// Extracted cards violate the card set invariants
    #[error("{0}")]
    CardSet(#[from] CardSetError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The single outward-facing extraction error
///
/// Whatever step failed, callers see one message prefixed with
/// "Failed to extract flashcards:". The underlying reason stays available
/// through [`ExtractionFailed::kind`].
#[derive(Error, Debug)]
#[error("Failed to extract flashcards: {source}")]
pub struct ExtractionFailed {
    source: ExtractorError,
}

impl ExtractionFailed {
    /// The reason the extraction failed
    pub fn kind(&self) -> &ExtractorError {
        &self.source
    }
}

impl From<ExtractorError> for ExtractionFailed {
    fn from(source: ExtractorError) -> Self {
        Self { source }
    }
}
