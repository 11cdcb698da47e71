//! Single-line CSV tokenizer with RFC 4180 quoting

/// Split one line into fields
///
/// A field wrapped in double quotes may contain commas literally, and a
/// doubled `""` inside quotes decodes to one `"`. Malformed quoting never
/// fails: an unterminated quote simply runs to the end of the line.
///
/// # Examples
///
/// ```
/// use cardsmith_io::parse_csv_line;
///
/// assert_eq!(parse_csv_line(r#"a,"b,c","say ""hi""""#), vec!["a", "b,c", r#"say "hi""#]);
/// assert_eq!(parse_csv_line("a,"), vec!["a", ""]);
/// ```
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

/// Quote a field for output, doubling embedded quotes
pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
