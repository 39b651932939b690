/// Unordered list with `- ` bullets.
pub struct UnorderedList;

impl UnorderedList {
    pub const BULLET: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::BULLET)
    }

    pub fn strip_bullet(line: &str) -> &str {
        line.strip_prefix(Self::BULLET).unwrap_or(line)
    }
}

/// Ordered list numbered `1. `, `2. `, ... with no gaps.
pub struct OrderedList;

impl OrderedList {
    /// The marker expected on the `number`th line (1-based).
    pub fn marker(number: usize) -> String {
        format!("{number}. ")
    }

    /// Item text of the `number`th line, if it carries the right marker.
    pub fn strip_marker(line: &str, number: usize) -> Option<&str> {
        line.strip_prefix(Self::marker(number).as_str())
    }

    pub fn is_item(line: &str, number: usize) -> bool {
        Self::strip_marker(line, number).is_some()
    }
}
