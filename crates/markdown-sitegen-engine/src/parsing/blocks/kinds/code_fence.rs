use crate::parsing::blocks::block_lines;

/// Fenced code block type with owned delimiter constant.
///
/// A fenced block is a raw zone: its body is never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Body lines between an opening and closing fence, joined with `\n`.
    ///
    /// Both fences must be exactly three backticks on their own line.
    pub fn body(block: &str) -> Option<String> {
        let lines = block_lines(block);
        if lines.len() < 2 {
            return None;
        }
        let (first, last) = (lines[0], lines[lines.len() - 1]);
        if first != Self::FENCE || last != Self::FENCE {
            return None;
        }
        Some(lines[1..lines.len() - 1].join("\n"))
    }

    pub fn is_fenced(block: &str) -> bool {
        Self::body(block).is_some()
    }
}
