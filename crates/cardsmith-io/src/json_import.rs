//! JSON card set normalizer

use crate::error::ImportError;
use crate::text::strip_bom;
use cardsmith_domain::{Card, CardId, CardSet, IdGenerator};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Title used when the document has none
pub const DEFAULT_JSON_TITLE: &str = "Imported Flashcards";

/// Source used when the document has none
pub const DEFAULT_JSON_SOURCE: &str = "Imported JSON file";

/// Import a card set from JSON text
///
/// The document must be an object with a `cards` array. Every entry must be
/// an object with non-blank string `question` and `answer`; the first entry
/// that is not fails the whole import. Ids are reused when present and unique
/// within the file, and generated otherwise. `title`, `source` and
/// `createdAt` are optional.
///
/// # Examples
///
/// ```
/// use cardsmith_domain::SequentialIdGenerator;
/// use cardsmith_io::import_json;
///
/// let ids = SequentialIdGenerator::default();
/// let set = import_json(r#"{"cards": [{"question": " Q ", "answer": "A"}]}"#, &ids).unwrap();
///
/// assert_eq!(set.title(), "Imported Flashcards");
/// assert_eq!(set.cards()[0].question(), "Q");
/// assert_eq!(set.cards()[0].id().as_str(), "card-1");
/// ```
pub fn import_json(text: &str, ids: &dyn IdGenerator) -> Result<CardSet, ImportError> {
    let value: Value =
        serde_json::from_str(strip_bom(text)).map_err(|e| ImportError::Json(e.to_string()))?;

    let document = value
        .as_object()
        .ok_or_else(|| ImportError::Json("Invalid JSON format".to_string()))?;

    let entries = document
        .get("cards")
        .and_then(Value::as_array)
        .ok_or_else(|| ImportError::Json("JSON must contain a \"cards\" array".to_string()))?;

    let mut seen = HashSet::with_capacity(entries.len());
    let mut cards = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        let position = idx + 1;
        let entry = entry
            .as_object()
            .ok_or_else(|| ImportError::Json(format!("Invalid card at position {}", position)))?;

        let question = required_text(entry, "question", position)?;
        let answer = required_text(entry, "answer", position)?;

        let id = match existing_id(entry) {
            Some(id) if seen.contains(&id) => {
                warn!("Card at position {} reuses id '{}', generating a new one", position, id);
                fresh_id(ids, &seen)
            }
            Some(id) => id,
            None => fresh_id(ids, &seen),
        };
        seen.insert(id.clone());

        cards.push(Card::new(id, question, answer));
    }

    if cards.is_empty() {
        return Err(ImportError::Json("No valid flashcards found in the file".to_string()));
    }

    let title = optional_text(document, "title").unwrap_or(DEFAULT_JSON_TITLE);
    let source = optional_text(document, "source").unwrap_or(DEFAULT_JSON_SOURCE);
    let created_at = optional_text(document, "createdAt")
        .and_then(parse_timestamp)
        .unwrap_or_else(Utc::now);

    debug!("Imported {} cards from JSON", cards.len());

    CardSet::new(title, source, cards, created_at).map_err(|e| ImportError::Json(e.to_string()))
}

fn required_text<'a>(
    entry: &'a Map<String, Value>,
    field: &str,
    position: usize,
) -> Result<&'a str, ImportError> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ImportError::Json(format!(
                "Card at position {} is missing a valid {}",
                position, field
            ))
        })
}

fn optional_text<'a>(document: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    document.get(field).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// An id carried by the entry: a non-blank string or a number
fn existing_id(entry: &Map<String, Value>) -> Option<CardId> {
    let id = match entry.get("id")? {
        Value::String(s) => CardId::new(s.as_str()),
        Value::Number(n) => CardId::new(n.to_string()),
        _ => return None,
    };
    (!id.is_blank()).then_some(id)
}

fn fresh_id(ids: &dyn IdGenerator, seen: &HashSet<CardId>) -> CardId {
    loop {
        let id = ids.next_id();
        if !seen.contains(&id) {
            return id;
        }
    }
}

/// RFC 3339, else a zone-less date-time or bare date read as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
