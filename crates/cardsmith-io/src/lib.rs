//! Cardsmith import and export
//!
//! Converts card files into [`CardSet`](cardsmith_domain::CardSet)s and back.
//!
//! # Architecture
//!
//! ```text
//! file → guard (size, extension) → read → JSON normalizer | CSV normalizer → CardSet
//! CardSet → export (CSV | JSON)
//! ```
//!
//! The CSV tokenizer ([`parse_csv_line`]) and column resolver
//! ([`find_column_index`]) are pure functions and can be used on their own.
//!
//! # Example Usage
//!
//! ```
//! use cardsmith_domain::SequentialIdGenerator;
//! use cardsmith_io::{import_csv, ImportLimits};
//!
//! let ids = SequentialIdGenerator::default();
//! let limits = ImportLimits::default();
//! let report = import_csv("Question,Answer\nWhat is 2+2?,4\n", &ids, &limits).unwrap();
//!
//! assert_eq!(report.card_set.len(), 1);
//! assert_eq!(report.card_set.title(), "Imported CSV (1 cards)");
//! ```

#![warn(missing_docs)]

mod columns;
mod csv;
mod csv_import;
mod error;
pub mod export;
mod guard;
mod importer;
mod json_import;
mod text;

pub use columns::{find_column_index, resolve_columns, ANSWER_COLUMN_NAMES, QUESTION_COLUMN_NAMES};
pub use csv::{parse_csv_line, quote_field};
pub use csv_import::{import_csv, CsvImport, SkipReason, SkippedRow, CSV_SOURCE};
pub use error::ImportError;
pub use guard::{validate_file, FileKind, ImportLimits, MAX_FILE_BYTES};
pub use importer::{ImportOutcome, Importer};
pub use json_import::{import_json, DEFAULT_JSON_SOURCE, DEFAULT_JSON_TITLE};
