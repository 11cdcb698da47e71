//! Content budget enforcement

use std::borrow::Cow;
use tracing::debug;

/// Appended to content that was cut at the budget
pub const TRUNCATION_MARKER: &str = "... [Content truncated due to length]";

/// Cap `content` at `max_chars` characters
///
/// Content within budget is returned unchanged. Longer content is cut at
/// the character boundary and [`TRUNCATION_MARKER`] is appended, so the
/// result is `max_chars` characters plus the marker.
///
/// # Examples
///
/// ```
/// use cardsmith_extractor::{truncate_content, TRUNCATION_MARKER};
///
/// assert_eq!(truncate_content("short", 3000), "short");
///
/// let long = "A".repeat(5000);
/// let cut = truncate_content(&long, 3000);
/// assert_eq!(cut.chars().count(), 3000 + TRUNCATION_MARKER.len());
/// assert!(cut.ends_with(TRUNCATION_MARKER));
/// ```
pub fn truncate_content(content: &str, max_chars: usize) -> Cow<'_, str> {
    match content.char_indices().nth(max_chars) {
        None => Cow::Borrowed(content),
        Some((boundary, _)) => {
            debug!(
                "Truncating content from {} to {} chars",
                content.chars().count(),
                max_chars
            );
            let mut truncated = String::with_capacity(boundary + TRUNCATION_MARKER.len());
            truncated.push_str(&content[..boundary]);
            truncated.push_str(TRUNCATION_MARKER);
            Cow::Owned(truncated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_budget_is_borrowed() {
        let result = truncate_content("short", 3000);
        assert!(matches!(result, Cow::Borrowed("short")));
    }

    #[test]
    fn test_exactly_at_budget_is_unchanged() {
        let text = "x".repeat(3000);
        assert_eq!(truncate_content(&text, 3000), text);
    }

    #[test]
    fn test_over_budget_is_cut_and_marked() {
        let text = "A".repeat(5000);
        let result = truncate_content(&text, 3000);
        assert_eq!(result.len(), 3000 + TRUNCATION_MARKER.len());
        assert!(result.starts_with(&"A".repeat(3000)));
        assert!(result.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        let result = truncate_content(&text, 4);
        assert_eq!(result, format!("éééé{}", TRUNCATION_MARKER));
    }

    #[test]
    fn test_zero_budget() {
        assert_eq!(truncate_content("", 0), "");
        assert_eq!(truncate_content("a", 0), TRUNCATION_MARKER);
    }
}
