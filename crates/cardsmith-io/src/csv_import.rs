//! CSV card set normalizer with skip-with-warning rows

use crate::columns::resolve_columns;
use crate::csv::parse_csv_line;
use crate::error::ImportError;
use crate::guard::ImportLimits;
use crate::text::strip_bom;
use cardsmith_domain::{Card, CardSet, IdGenerator};
use chrono::Utc;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Source descriptor of every CSV import
pub const CSV_SOURCE: &str = "Imported CSV file";

/// Why a data row was left out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The row has fewer fields than the resolved columns need
    InsufficientColumns,
    /// The question or answer cell is blank
    EmptyCell,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InsufficientColumns => f.write_str("insufficient columns"),
            SkipReason::EmptyCell => f.write_str("empty question or answer"),
        }
    }
}

/// A data row that did not become a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based row number among non-blank lines (the header is row 1)
    pub row: usize,
    /// Why it was skipped
    pub reason: SkipReason,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {} has {}, skipping", self.row, self.reason)
    }
}

/// Result of a CSV import
#[derive(Debug, Clone)]
pub struct CsvImport {
    /// The imported cards
    pub card_set: CardSet,
    /// Rows that were skipped, in file order
    pub skipped: Vec<SkippedRow>,
}

/// Import a card set from CSV text
///
/// Lines are split on `\n`, trimmed, and blank lines dropped. The first line
/// is the header; question and answer columns are inferred from it and fall
/// back to the first two columns. Malformed data rows are skipped with a
/// warning. The import fails only when no card survives, or when
/// `limits.max_skip_ratio` is set and exceeded.
pub fn import_csv(
    text: &str,
    ids: &dyn IdGenerator,
    limits: &ImportLimits,
) -> Result<CsvImport, ImportError> {
    let lines: Vec<&str> = strip_bom(text)
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(csv_error("CSV file must contain at least a header row and one data row"));
    }

    let header = parse_csv_line(lines[0]);
    if header.len() < 2 {
        return Err(csv_error("CSV file must have at least 2 columns"));
    }

    let (question_idx, answer_idx) = resolve_columns(&header);
    let required = question_idx.max(answer_idx) + 1;
    debug!("CSV columns: question={}, answer={}", question_idx, answer_idx);

    let mut cards = Vec::new();
    let mut skipped = Vec::new();

    for (idx, line) in lines.iter().enumerate().skip(1) {
        let row = idx + 1;
        let fields = parse_csv_line(line);

        if fields.len() < required {
            skip(&mut skipped, row, SkipReason::InsufficientColumns);
            continue;
        }

        let question = fields[question_idx].trim();
        let answer = fields[answer_idx].trim();
        if question.is_empty() || answer.is_empty() {
            skip(&mut skipped, row, SkipReason::EmptyCell);
            continue;
        }

        cards.push(Card::new(ids.next_id(), question, answer));
    }

    if cards.is_empty() {
        return Err(csv_error("No valid flashcards found in the CSV file"));
    }

    if let Some(max_ratio) = limits.max_skip_ratio {
        let data_rows = lines.len() - 1;
        let ratio = skipped.len() as f64 / data_rows as f64;
        if ratio > max_ratio {
            return Err(csv_error(format!(
                "Too many invalid rows: {} of {} data rows skipped",
                skipped.len(),
                data_rows
            )));
        }
    }

    let title = format!("Imported CSV ({} cards)", cards.len());
    let card_set = CardSet::new(title, CSV_SOURCE, cards, Utc::now())
        .map_err(|e| csv_error(e.to_string()))?;

    debug!("Imported {} cards from CSV, skipped {} rows", card_set.len(), skipped.len());

    Ok(CsvImport { card_set, skipped })
}

fn skip(skipped: &mut Vec<SkippedRow>, row: usize, reason: SkipReason) {
    let entry = SkippedRow { row, reason };
    warn!("{}", entry);
    skipped.push(entry);
}

fn csv_error(message: impl Into<String>) -> ImportError {
    ImportError::Csv(message.into())
}
