//! Cardsmith Extractor
//!
//! Turns unstructured text into study cards with one chat-completion call.
//!
//! # Architecture
//!
//! ```text
//! content → truncate → prompt → endpoint resolution → LLM → parse → cards
//! ```
//!
//! # Key Features
//!
//! - **Content budget**: input is capped at a character budget with a visible marker
//! - **Fixed prompt**: system instruction asking for 10-20 pairs as a `flashcards` JSON object
//! - **Endpoint routing**: local servers go through the proxy, remote APIs are called directly
//! - **Response normalization**: string or object content, optional Markdown code fence
//! - **Consolidated errors**: every failure surfaces as "Failed to extract flashcards: ..."
//!
//! # Example Usage
//!
//! ```no_run
//! use cardsmith_extractor::{ExtractionRequest, Extractor, ExtractorConfig};
//! use cardsmith_llm::{HttpChatClient, LlmConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(
//!     HttpChatClient::new(),
//!     LlmConfig::from_env(),
//!     ExtractorConfig::default(),
//! );
//!
//! let text = "Photosynthesis converts light into chemical energy.";
//! let request = ExtractionRequest::custom_text(text);
//! let set = extractor.extract_set(request).await?;
//!
//! println!("{}: {} cards", set.title(), set.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod truncate;
mod types;


pub use config::ExtractorConfig;
pub use error::{ExtractionFailed, ExtractorError};
pub use extractor::Extractor;
pub use prompt::{PromptBuilder, MAX_CARDS, MIN_CARDS};
pub use truncate::{truncate_content, TRUNCATION_MARKER};
pub use types::{ContentSource, ExtractionRequest, CUSTOM_TEXT_SOURCE, CUSTOM_TEXT_TITLE};
