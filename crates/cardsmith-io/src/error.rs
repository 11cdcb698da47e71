//! Error types for card import

use crate::guard::FileKind;
use thiserror::Error;

/// Errors that can occur while importing a card file
#[derive(Error, Debug)]
pub enum ImportError {
    /// The JSON document is malformed or contains no usable cards
    #[error("Failed to parse JSON file: {0}")]
    Json(String),

    /// The CSV document is malformed or contains no usable cards
    #[error("Failed to parse CSV file: {0}")]
    Csv(String),

    /// The file exceeds the configured size limit
    #[error("File size too large. Maximum size is {limit_mb}MB.")]
    FileTooLarge {
        /// File size in bytes
        size: u64,
        /// Limit in whole mebibytes
        limit_mb: u64,
    },

    /// The file name does not carry the expected extension
    #[error("Please select a {} file (.{})", .0.label(), .0.extension())]
    WrongExtension(FileKind),

    /// The file could not be read
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),
}

impl ImportError {
    /// Whether the failure happened before any parsing was attempted
    pub fn is_rejected_by_guard(&self) -> bool {
        matches!(self, ImportError::FileTooLarge { .. } | ImportError::WrongExtension(_))
    }
}
