use std::sync::OnceLock;

use regex::Regex;

/// Bold emphasis, delimited by a pair of doubled markers.
pub struct Bold;

impl Bold {
    pub const STARS: &'static str = "**";
    pub const UNDERSCORES: &'static str = "__";
}

/// Italic emphasis, delimited by single markers.
///
/// Matched by pattern rather than by splitting, so lone underscores or
/// asterisks pass through as text. The content may not contain the marker.
pub struct Italic;

impl Italic {
    pub fn underscore_pattern() -> &'static Regex {
        static UNDERSCORE: OnceLock<Regex> = OnceLock::new();
        UNDERSCORE.get_or_init(|| Regex::new(r"_([^_]+?)_").expect("Invalid underscore regex"))
    }

    pub fn star_pattern() -> &'static Regex {
        static STAR: OnceLock<Regex> = OnceLock::new();
        STAR.get_or_init(|| Regex::new(r"\*([^*]+?)\*").expect("Invalid asterisk regex"))
    }
}
