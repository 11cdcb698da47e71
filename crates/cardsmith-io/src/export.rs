//! Card set exporters
//!
//! Both formats re-import through [`Importer`](crate::Importer) to the same
//! questions and answers, as long as no cell contains a line break.

use crate::csv::quote_field;
use crate::guard::FileKind;
use cardsmith_domain::CardSet;

/// Render `set` as CSV with a `Question,Answer` header, every cell quoted
pub fn to_csv(set: &CardSet) -> String {
    std::iter::once(csv_row("Question", "Answer"))
        .chain(set.cards().iter().map(|card| csv_row(card.question(), card.answer())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render `set` as pretty-printed JSON with camelCase keys
pub fn to_json(set: &CardSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(set)
}

/// Render `set` in the given format
pub fn render(set: &CardSet, kind: FileKind) -> Result<String, serde_json::Error> {
    match kind {
        FileKind::Json => to_json(set),
        FileKind::Csv => Ok(to_csv(set)),
    }
}

/// Download name for an exported set: whitespace runs in the title become `_`
///
/// # Examples
///
/// ```
/// use cardsmith_io::{export::file_name, FileKind};
///
/// assert_eq!(
///     file_name("Custom Text  Flashcards", FileKind::Csv),
///     "Custom_Text_Flashcards_flashcards.csv"
/// );
/// ```
pub fn file_name(title: &str, kind: FileKind) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(c);
            in_whitespace = false;
        }
    }
    format!("{}_flashcards.{}", stem, kind.extension())
}

fn csv_row(question: &str, answer: &str) -> String {
    format!("{},{}", quote_field(question), quote_field(answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith_domain::{Card, CardId};
    use chrono::{TimeZone, Utc};

    fn sample_set() -> CardSet {
        CardSet::new(
            "Quotes, Commas",
            "Custom text",
            vec![
                Card::new(CardId::new("1"), "What is \"CSV\"?", "Comma, separated"),
                Card::new(CardId::new("2"), "Plain", "Text"),
            ],
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_to_csv() {
        assert_eq!(
            to_csv(&sample_set()),
            "\"Question\",\"Answer\"\n\
             \"What is \"\"CSV\"\"?\",\"Comma, separated\"\n\
             \"Plain\",\"Text\""
        );
    }

    #[test]
    fn test_to_json_shape() {
        let rendered = to_json(&sample_set()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["title"], "Quotes, Commas");
        assert_eq!(json["createdAt"], "2024-01-02T03:04:05Z");
        assert_eq!(json["cards"][0]["id"], "1");
        assert_eq!(json["cards"][1]["answer"], "Text");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("DNA structure", FileKind::Json), "DNA_structure_flashcards.json");
        assert_eq!(file_name("a \t b", FileKind::Csv), "a_b_flashcards.csv");
    }
}
