//! Parse chat-completion bodies into card candidates

use crate::error::ExtractorError;
use cardsmith_llm::ChatCompletionResponse;
use serde_json::Value;
use tracing::warn;

/// A question/answer pair as returned by the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CardCandidate {
    pub question: String,
    pub answer: String,
}

/// Parse a raw completion body into card candidates
///
/// Expects `choices[0].message.content` to hold (or be) a JSON object with
/// a `flashcards` array. Entries that are not objects with non-blank string
/// `question` and `answer` are skipped with a warning; kept values are not
/// trimmed.
pub(crate) fn parse_completion_body(body: &str) -> Result<Vec<CardCandidate>, ExtractorError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| ExtractorError::InvalidFormat(format!("response body is not JSON: {}", e)))?;

    let payload = match response.first_content() {
        None | Some(Value::Null) => return Err(ExtractorError::NoResponse),
        Some(Value::String(text)) if text.trim().is_empty() => {
            return Err(ExtractorError::NoResponse)
        }
        Some(Value::String(text)) => serde_json::from_str::<Value>(strip_code_fence(text))
            .map_err(|e| {
                ExtractorError::InvalidFormat(format!("content is not valid JSON: {}", e))
            })?,
        // Some backends return the decoded object instead of a JSON string
        Some(object @ Value::Object(_)) => object.clone(),
        Some(other) => {
            return Err(ExtractorError::InvalidFormat(format!(
                "unexpected content type: {}",
                type_name(other)
            )))
        }
    };

    parse_flashcards(&payload)
}

fn parse_flashcards(payload: &Value) -> Result<Vec<CardCandidate>, ExtractorError> {
    let entries = payload
        .get("flashcards")
        .and_then(Value::as_array)
        .ok_or_else(|| ExtractorError::InvalidFormat("missing \"flashcards\" array".to_string()))?;

    let mut candidates = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        match parse_entry(entry) {
            Ok(candidate) => candidates.push(candidate),
            Err(reason) => warn!("Skipping flashcard {}: {}", idx + 1, reason),
        }
    }

    Ok(candidates)
}

fn parse_entry(entry: &Value) -> Result<CardCandidate, String> {
    let obj = entry
        .as_object()
        .ok_or_else(|| "entry is not a JSON object".to_string())?;

    let field = |name: &str| {
        obj.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| format!("missing or empty '{}'", name))
    };

    Ok(CardCandidate {
        question: field("question")?,
        answer: field("answer")?,
    })
}

/// Strip a surrounding Markdown code fence, if present
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    // Drop the opening fence line (```json or ```) and the closing fence
    let without_open = match trimmed.find('\n') {
        Some(newline) => &trimmed[newline + 1..],
        None => return "",
    };
    without_open
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
