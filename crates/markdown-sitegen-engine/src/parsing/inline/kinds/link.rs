use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Inline image `![alt](url)`.
pub struct Image;

impl Image {
    pub fn pattern() -> &'static Regex {
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        IMAGE.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
    }

    /// Finds every `(alt, url)` pair in `text`.
    pub fn extract(text: &str) -> Vec<(String, String)> {
        Self::pattern()
            .captures_iter(text)
            .map(|c| (c[1].to_string(), c[2].to_string()))
            .collect()
    }
}

/// Inline link `[text](url)`.
///
/// A bracket directly preceded by `!` belongs to an image and is never a link.
pub struct Link;

impl Link {
    pub const BANG: u8 = b'!';

    pub fn pattern() -> &'static Regex {
        static LINK: OnceLock<Regex> = OnceLock::new();
        LINK.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
    }

    /// Leftmost link candidate at or after `start` that is not preceded by `!`.
    ///
    /// A rejected candidate resumes the search one byte past its `[`, so a
    /// later bracket inside the rejected text can still match.
    pub fn captures_at(text: &str, start: usize) -> Option<Captures<'_>> {
        let mut from = start;
        while from <= text.len() {
            let caps = Self::pattern().captures_at(text, from)?;
            let at = caps.get(0)?.start();
            if at > 0 && text.as_bytes()[at - 1] == Self::BANG {
                from = at + 1;
                continue;
            }
            return Some(caps);
        }
        None
    }

    /// Finds every `(text, url)` pair in `text`, skipping images.
    pub fn extract(text: &str) -> Vec<(String, String)> {
        let mut out = vec![];
        let mut from = 0;
        while let Some(caps) = Self::captures_at(text, from) {
            out.push((caps[1].to_string(), caps[2].to_string()));
            from = caps.get(0).map_or(text.len() + 1, |m| m.end());
        }
        out
    }
}
