//! Pre-parse file checks

use crate::error::ImportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Default maximum accepted file size (10 MiB)
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Logical file type of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// JSON card set document
    Json,
    /// CSV table with a header row
    Csv,
}

impl FileKind {
    /// Conventional extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Json => "json",
            FileKind::Csv => "csv",
        }
    }

    /// Upper-case label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Json => "JSON",
            FileKind::Csv => "CSV",
        }
    }

    /// Infer the kind from a path's extension (case-insensitive)
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(FileKind::Json),
            "csv" => Some(FileKind::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(FileKind::Json),
            "csv" => Ok(FileKind::Csv),
            other => Err(format!("Unknown file kind: {}", other)),
        }
    }
}

/// Limits applied to imports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportLimits {
    /// Largest accepted file, in bytes
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,

    /// Largest tolerated share of skipped CSV data rows (0.0..=1.0)
    ///
    /// Unset means any number of rows may be skipped as long as one card
    /// survives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_skip_ratio: Option<f64>,
}

impl ImportLimits {
    /// Validate the limits
    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_bytes == 0 {
            return Err("max_file_bytes must be greater than 0".to_string());
        }
        if let Some(ratio) = self.max_skip_ratio {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(format!("max_skip_ratio must be between 0.0 and 1.0, got {}", ratio));
            }
        }
        Ok(())
    }
}

impl Default for ImportLimits {
    fn default() -> Self {
        Self {
            max_file_bytes: MAX_FILE_BYTES,
            max_skip_ratio: None,
        }
    }
}

fn default_max_file_bytes() -> u64 {
    MAX_FILE_BYTES
}

/// Check size and extension before any parsing
///
/// Size is checked first. The extension is the text after the last `.` of
/// the lowercased name, so `cards.CSV` is accepted as CSV and a name with no
/// dot is rejected.
pub fn validate_file(
    size: u64,
    file_name: &str,
    kind: FileKind,
    limits: &ImportLimits,
) -> Result<(), ImportError> {
    if size > limits.max_file_bytes {
        return Err(ImportError::FileTooLarge {
            size,
            limit_mb: limits.max_file_bytes / (1024 * 1024),
        });
    }

    let lowered = file_name.to_lowercase();
    let extension = lowered.rsplit_once('.').map(|(_, ext)| ext);
    if extension != Some(kind.extension()) {
        return Err(ImportError::WrongExtension(kind));
    }

    Ok(())
}
