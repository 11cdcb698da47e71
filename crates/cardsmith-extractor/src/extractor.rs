//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::{ExtractionFailed, ExtractorError};
use crate::parser::parse_completion_body;
use crate::prompt::PromptBuilder;
use crate::truncate::truncate_content;
use crate::types::ExtractionRequest;
use cardsmith_domain::{Card, CardSet, IdGenerator, UuidIdGenerator};
use cardsmith_llm::{resolve_endpoint, ChatClient, ChatRequest, ConfigSource, Route};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// The Extractor converts unstructured text into study cards
///
/// Holds no per-call state: configuration is fetched from the
/// [`ConfigSource`] on every call and each call works on its own values.
/// Callers must not overlap calls for the same logical session; nothing
/// here guards against it.
pub struct Extractor<C>
where
    C: ChatClient,
{
    client: C,
    config_source: Arc<dyn ConfigSource>,
    config: ExtractorConfig,
    ids: Arc<dyn IdGenerator>,
}

impl<C> Extractor<C>
where
    C: ChatClient,
{
    /// Create a new Extractor generating UUIDv7 card ids
    pub fn new(
        client: C,
        config_source: impl ConfigSource + 'static,
        config: ExtractorConfig,
    ) -> Self {
        Self {
            client,
            config_source: Arc::new(config_source),
            config,
            ids: Arc::new(UuidIdGenerator),
        }
    }

    /// Use a specific id generator for new cards
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Extract cards from `content`
    ///
    /// `api_key` wins over the configured default. With `use_mock` the
    /// request carries the mock query parameter and header so the proxy
    /// answers with its canned payload.
    pub async fn extract(
        &self,
        content: &str,
        api_key: Option<&str>,
        use_mock: bool,
    ) -> Result<Vec<Card>, ExtractionFailed> {
        self.try_extract(content, api_key, use_mock)
            .await
            .map_err(ExtractionFailed::from)
    }

    /// Extract a complete card set, titled and sourced from the request
    pub async fn extract_set(
        &self,
        request: ExtractionRequest,
    ) -> Result<CardSet, ExtractionFailed> {
        if request.content.trim().is_empty() {
            return Err(ExtractorError::EmptyContent.into());
        }

        let cards = self
            .try_extract(&request.content, request.api_key.as_deref(), request.use_mock)
            .await?;

        let set = CardSet::new(
            request.source.title(),
            request.source.descriptor(),
            cards,
            Utc::now(),
        )
        .map_err(ExtractorError::from)?;

        info!("Extracted card set '{}' with {} cards", set.title(), set.len());
        Ok(set)
    }

    async fn try_extract(
        &self,
        content: &str,
        api_key: Option<&str>,
        use_mock: bool,
    ) -> Result<Vec<Card>, ExtractorError> {
        self.config.validate().map_err(ExtractorError::Config)?;

        let llm_config = self.config_source.llm_config();
        if llm_config.base_url.trim().is_empty() {
            return Err(ExtractorError::MissingBaseUrl);
        }

        let target = resolve_endpoint(&llm_config, api_key, use_mock);
        if target.route == Route::Direct && target.api_key.is_none() {
            return Err(ExtractorError::MissingApiKey(llm_config.base_url));
        }

        info!(
            "Starting extraction: {} chars, route {:?}, mock {}",
            content.chars().count(),
            target.route,
            target.uses_mock
        );

        let truncated = truncate_content(content, self.config.max_content_chars);
        let messages = PromptBuilder::new(&truncated).build();
        let request = ChatRequest::new(llm_config.model, messages);

        debug!("Prompt user message length: {} chars", request.messages[1].content.len());

        let body = self.client.send(&target, &request).await?;

        debug!("LLM response length: {} chars", body.len());

        let candidates = parse_completion_body(&body)?;

        info!("Parsed {} flashcards", candidates.len());

        Ok(candidates
            .into_iter()
            .map(|candidate| Card::new(self.ids.next_id(), candidate.question, candidate.answer))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith_domain::SequentialIdGenerator;
    use cardsmith_llm::{LlmConfig, MockChatClient};

    const ONE_CARD: &str = r#"{"flashcards":[{"question":"Q","answer":"A"}]}"#;

    fn create_test_extractor(
        client: MockChatClient,
        config: LlmConfig,
    ) -> Extractor<MockChatClient> {
        Extractor::new(client, config, ExtractorConfig::default())
            .with_id_generator(SequentialIdGenerator::new("t"))
    }

    #[tokio::test]
    async fn test_extract_assigns_generated_ids() {
        let extractor =
            create_test_extractor(MockChatClient::with_content(ONE_CARD), LlmConfig::default());

        let cards = extractor.extract("X", None, false).await.unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id().as_str(), "t-1");
        assert_eq!(cards[0].question(), "Q");
        assert_eq!(cards[0].answer(), "A");
    }

    #[tokio::test]
    async fn test_blank_base_url_fails_before_network() {
        let client = MockChatClient::with_content(ONE_CARD);
        let config = LlmConfig {
            base_url: "  ".to_string(),
            ..LlmConfig::default()
        };
        let extractor = create_test_extractor(client.clone(), config);

        let err = extractor.extract("X", None, false).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to extract flashcards: API base URL is not configured");
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_direct_call_without_key_fails_before_network() {
        let client = MockChatClient::with_content(ONE_CARD);
        let config = LlmConfig {
            base_url: "https://api.openai.com/v1".to_string(),
            ..LlmConfig::default()
        };
        let extractor = create_test_extractor(client.clone(), config);

        let err = extractor.extract("X", None, false).await.unwrap_err();

        assert!(matches!(err.kind(), ExtractorError::MissingApiKey(_)));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_content_is_truncated_in_prompt() {
        let client = MockChatClient::with_content(ONE_CARD);
        let extractor = create_test_extractor(client.clone(), LlmConfig::default());

        extractor.extract(&"A".repeat(5000), None, false).await.unwrap();

        let (_, request) = client.last_call().unwrap();
        let user = &request.messages[1].content;
        assert!(user.ends_with(crate::TRUNCATION_MARKER));
        assert!(!user.contains(&"A".repeat(3001)));
    }

    #[tokio::test]
    async fn test_empty_content_rejected_for_card_sets() {
        let client = MockChatClient::with_content(ONE_CARD);
        let extractor = create_test_extractor(client.clone(), LlmConfig::default());

        let err = extractor
            .extract_set(ExtractionRequest::custom_text("   "))
            .await
            .unwrap_err();

        assert!(matches!(err.kind(), ExtractorError::EmptyContent));
        assert_eq!(client.call_count(), 0);
    }
}
