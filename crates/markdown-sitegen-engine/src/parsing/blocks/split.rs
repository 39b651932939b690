use std::sync::OnceLock;

use regex::Regex;

fn blank_line_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"\n\s*\n").expect("Invalid block separator regex"))
}

/// Splits a document into blocks on blank lines.
///
/// Any run of blank or whitespace-only lines is one separator. Each block is
/// trimmed, and blocks that are empty after trimming are dropped.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    blank_line_separator()
        .split(markdown.trim())
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
