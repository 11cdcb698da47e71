//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use cardsmith_extractor::{ExtractionRequest, Extractor};
use cardsmith_llm::{ChatClient, HttpChatClient};
use std::io::{self, Read};
use tracing::debug;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let mut llm = config.llm.clone();
    if let Some(base_url) = &args.base_url {
        llm.base_url = base_url.clone();
    }
    if let Some(model) = &args.model {
        llm.model = model.clone();
    }

    let mut client = HttpChatClient::new();
    if let Some(timeout) = config.extraction.request_timeout() {
        client = client.with_timeout(timeout);
    }

    let extractor = Extractor::new(client, llm, config.extraction.clone());
    let output = run_extract(args, &extractor, formatter).await?;
    println!("{}", output);

    Ok(())
}

/// Read the content, extract a card set and render it.
pub async fn run_extract<C: ChatClient>(
    args: ExtractArgs,
    extractor: &Extractor<C>,
    formatter: &Formatter,
) -> Result<String> {
    let content = read_content(&args).await?;
    debug!("Read {} characters of content", content.chars().count());

    let mut request = match args.url {
        Some(url) => ExtractionRequest::from_url(url, content),
        None => ExtractionRequest::custom_text(content),
    };
    if let Some(api_key) = args.api_key {
        request = request.with_api_key(api_key);
    }
    request = request.with_mock(args.mock);

    let set = extractor.extract_set(request).await?;
    formatter.format_card_set(&set)
}

async fn read_content(args: &ExtractArgs) -> Result<String> {
    if let Some(text) = &args.text {
        Ok(text.clone())
    } else if let Some(path) = &args.file {
        Ok(tokio::fs::read_to_string(path).await?)
    } else if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Err(CliError::InvalidInput(
            "Must specify one of --text, --file or --stdin".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use cardsmith_extractor::ExtractorConfig;
    use cardsmith_llm::{LlmConfig, MockChatClient};

    fn args() -> ExtractArgs {
        ExtractArgs {
            text: None,
            file: None,
            stdin: false,
            url: None,
            api_key: None,
            mock: false,
            base_url: None,
            model: None,
        }
    }

    fn extractor(client: MockChatClient) -> Extractor<MockChatClient> {
        Extractor::new(client, LlmConfig::default(), ExtractorConfig::default())
    }

    #[tokio::test]
    async fn test_extract_from_text() {
        let client =
            MockChatClient::with_content(r#"{"flashcards":[{"question":"Q","answer":"A"}]}"#);
        let formatter = Formatter::new(OutputFormat::Json, false);

        let output = run_extract(
            ExtractArgs {
                text: Some("Some text".to_string()),
                url: Some("https://en.wikipedia.org/wiki/Rust_(programming_language)".to_string()),
                mock: true,
                ..args()
            },
            &extractor(client.clone()),
            &formatter,
        )
        .await
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "Rust (programming language)");
        assert_eq!(value["cards"][0]["question"], "Q");
        assert!(client.last_call().unwrap().0.uses_mock);
    }

    #[tokio::test]
    async fn test_extract_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "File content").unwrap();

        let client = MockChatClient::with_content(r#"{"flashcards":[]}"#);
        let output = run_extract(
            ExtractArgs {
                file: Some(path),
                ..args()
            },
            &extractor(client.clone()),
            &Formatter::new(OutputFormat::Table, false),
        )
        .await
        .unwrap();

        assert!(output.contains("No cards found"));
        let (_, request) = client.last_call().unwrap();
        assert!(request.messages[1].content.ends_with("File content"));
    }

    #[tokio::test]
    async fn test_missing_input() {
        let client = MockChatClient::with_content("{}");
        let formatter = Formatter::new(OutputFormat::Table, false);
        let err = run_extract(args(), &extractor(client), &formatter)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_failure_message_is_consolidated() {
        let client = MockChatClient::with_status(401, "Unauthorized");
        let err = run_extract(
            ExtractArgs {
                text: Some("x".to_string()),
                ..args()
            },
            &extractor(client),
            &Formatter::new(OutputFormat::Table, false),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to extract flashcards: API request failed: 401 Unauthorized"
        );
    }
}
