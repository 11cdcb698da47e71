//! Decoding file bytes into importable text

use std::borrow::Cow;
use tracing::warn;

const BOM: char = '\u{feff}';

/// Decode file contents, replacing invalid UTF-8 sequences with U+FFFD
///
/// Files saved in a legacy encoding (Latin-1 exports from spreadsheets)
/// still import; only the affected characters are lost.
pub(crate) fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        warn!("File is not valid UTF-8, undecodable bytes were replaced");
    }
    text
}

/// Drop a leading byte-order mark
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}
