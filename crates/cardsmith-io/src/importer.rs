//! Async file importer

use crate::csv_import::{import_csv, SkippedRow};
use crate::error::ImportError;
use crate::guard::{validate_file, FileKind, ImportLimits};
use crate::json_import::import_json;
use crate::text::decode;
use cardsmith_domain::{CardSet, IdGenerator, UuidIdGenerator};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Result of importing a file of either kind
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    /// The imported cards
    pub card_set: CardSet,
    /// CSV rows left out (always empty for JSON)
    pub skipped: Vec<SkippedRow>,
}

/// Imports card files from disk
///
/// The file guard runs on the file's metadata before its contents are read.
pub struct Importer {
    limits: ImportLimits,
    ids: Arc<dyn IdGenerator>,
}

impl Importer {
    /// Create an importer generating UUIDv7 ids
    pub fn new(limits: ImportLimits) -> Self {
        Self {
            limits,
            ids: Arc::new(UuidIdGenerator),
        }
    }

    /// Use a specific id generator for cards without a usable id
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Check, read and parse the file at `path` as `kind`
    ///
    /// Contents are decoded leniently: invalid UTF-8 is replaced rather
    /// than rejected, and a leading byte-order mark is ignored.
    pub async fn import_file(
        &self,
        path: impl AsRef<Path>,
        kind: FileKind,
    ) -> Result<ImportOutcome, ImportError> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        validate_file(metadata.len(), &file_name, kind, &self.limits)?;

        let bytes = tokio::fs::read(path).await?;
        let outcome = self.import_str(&decode(&bytes), kind)?;

        info!(
            "Imported '{}' from {}: {} cards, {} rows skipped",
            outcome.card_set.title(),
            path.display(),
            outcome.card_set.len(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }

    /// Parse already-read text as `kind`
    pub fn import_str(&self, text: &str, kind: FileKind) -> Result<ImportOutcome, ImportError> {
        match kind {
            FileKind::Json => Ok(ImportOutcome {
                card_set: import_json(text, self.ids.as_ref())?,
                skipped: Vec::new(),
            }),
            FileKind::Csv => {
                let report = import_csv(text, self.ids.as_ref(), &self.limits)?;
                Ok(ImportOutcome {
                    card_set: report.card_set,
                    skipped: report.skipped,
                })
            }
        }
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new(ImportLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith_domain::SequentialIdGenerator;

    #[test]
    fn test_import_str_dispatches_by_kind() {
        let importer = Importer::default().with_id_generator(SequentialIdGenerator::default());

        let json = importer
            .import_str(r#"{"cards": [{"question": "Q", "answer": "A"}]}"#, FileKind::Json)
            .unwrap();
        assert_eq!(json.card_set.source(), "Imported JSON file");

        let csv = importer.import_str("Question,Answer\nQ,A\nbroken", FileKind::Csv).unwrap();
        assert_eq!(csv.card_set.source(), "Imported CSV file");
        assert_eq!(csv.skipped.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_a_read_error() {
        let err = Importer::default()
            .import_file("/definitely/not/here.json", FileKind::Json)
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Read(_)));
        assert!(err.to_string().starts_with("Failed to read file: "));
    }
}
