//! Header-based column inference

/// Header substrings that identify the question column
pub const QUESTION_COLUMN_NAMES: &[&str] = &["question", "q"];

/// Header substrings that identify the answer column
pub const ANSWER_COLUMN_NAMES: &[&str] = &["answer", "a"];

/// Index of the first header containing one of `names`
///
/// Headers are lowercased and trimmed before the substring check; `names`
/// are expected in lowercase.
pub fn find_column_index(headers: &[String], names: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim().to_lowercase();
        names.iter().any(|name| header.contains(name))
    })
}

/// Resolve question and answer column indices
///
/// Each column is looked up independently. An unresolved question column
/// falls back to 0, an unresolved answer column to 1.
pub fn resolve_columns(headers: &[String]) -> (usize, usize) {
    let question = find_column_index(headers, QUESTION_COLUMN_NAMES).unwrap_or(0);
    let answer = find_column_index(headers, ANSWER_COLUMN_NAMES).unwrap_or(1);
    (question, answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_headers() {
        assert_eq!(resolve_columns(&headers(&["Question", "Answer"])), (0, 1));
    }

    #[test]
    fn test_reordered_headers() {
        assert_eq!(resolve_columns(&headers(&["Notes", " ANSWER ", "Question text"])), (2, 1));
    }

    #[test]
    fn test_fallback_positions() {
        assert_eq!(resolve_columns(&headers(&["Front", "Back"])), (0, 1));
    }

    #[test]
    fn test_substring_match_is_loose() {
        // "Category" contains "a", so it wins the answer lookup
        let found = find_column_index(&headers(&["Term", "Category"]), ANSWER_COLUMN_NAMES);
        assert_eq!(found, Some(1));
        assert_eq!(find_column_index(&headers(&["Term"]), QUESTION_COLUMN_NAMES), None);
    }

    #[test]
    fn test_first_match_wins() {
        let found = find_column_index(&headers(&["Q1", "Question"]), QUESTION_COLUMN_NAMES);
        assert_eq!(found, Some(0));
    }
}
