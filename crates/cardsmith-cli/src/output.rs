//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use cardsmith_domain::CardSet;
use cardsmith_io::{export, SkippedRow};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style, Width,
    },
};

/// Widest a question or answer cell may get before wrapping.
const CELL_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a card set.
    pub fn format_card_set(&self, set: &CardSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(export::to_json(set)?),
            OutputFormat::Csv => Ok(export::to_csv(set)),
            OutputFormat::Table => Ok(self.format_card_set_table(set)),
        }
    }

    /// Format a card set as a table with a summary line.
    fn format_card_set_table(&self, set: &CardSet) -> String {
        let summary = format!("{} ({} cards, source: {})", set.title(), set.len(), set.source());

        if set.is_empty() {
            return format!("{}\n{}", summary, self.colorize("No cards found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Question", "Answer"]);

        for (idx, card) in set.cards().iter().enumerate() {
            builder.push_record([
                (idx + 1).to_string(),
                card.question().to_string(),
                card.answer().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Width::wrap(CELL_WIDTH)))
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.colorize(&summary, "cyan"), table)
    }

    /// Format a skipped CSV row.
    pub fn skipped_row(&self, row: &SkippedRow) -> String {
        self.warning(&row.to_string())
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith_domain::{Card, CardId};
    use cardsmith_io::SkipReason;
    use chrono::Utc;

    fn create_test_set() -> CardSet {
        CardSet::new(
            "Photosynthesis",
            "Custom text",
            vec![
                Card::new(
                    CardId::new("1"),
                    "What organelle hosts photosynthesis?",
                    "The chloroplast",
                ),
                Card::new(CardId::new("2"), "What gas is released?", "Oxygen"),
            ],
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_card_set(&create_test_set()).unwrap();
        assert!(output.starts_with("Photosynthesis (2 cards, source: Custom text)"));
        assert!(output.contains("Question"));
        assert!(output.contains("The chloroplast"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_card_set(&create_test_set()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["cards"][1]["answer"], "Oxygen");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_csv_format() {
        let formatter = Formatter::new(OutputFormat::Csv, false);
        let output = formatter.format_card_set(&create_test_set()).unwrap();
        assert!(output.starts_with("\"Question\",\"Answer\"\n"));
    }

    #[test]
    fn test_empty_set() {
        let set = CardSet::new("Empty", "Custom text", Vec::new(), Utc::now()).unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_card_set(&set).unwrap();
        assert!(output.contains("No cards found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(
            formatter.skipped_row(&SkippedRow { row: 4, reason: SkipReason::EmptyCell }),
            "⚠ Row 4 has empty question or answer, skipping"
        );
    }
}
