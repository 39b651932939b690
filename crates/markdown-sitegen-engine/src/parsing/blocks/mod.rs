//! # Block Parsing
//!
//! Blocks are blank-line separated chunks of a document.
//!
//! ## Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into trimmed,
//!    non-empty blocks
//! 2. **Classification** (`classify`): each block gets exactly one `BlockType`
//! 3. **Rendering** (`render`): block markup is stripped and the rest becomes a
//!    parent `HtmlNode`
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, lists, Paragraph)
//! - **`split`**: `markdown_to_blocks`
//! - **`classify`**: `MarkdownBlockClassifier`
//! - **`render`**: `block_to_html_node`
//!
//! ## Key Invariants
//!
//! - Classification is total; paragraph is the fallback
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod render;
pub mod split;
pub mod types;

pub use classify::MarkdownBlockClassifier;
pub use render::block_to_html_node;
pub use split::markdown_to_blocks;
pub use types::BlockType;

/// Lines of a block, with a trailing `\r` removed from each.
///
/// An empty block has a single empty line.
pub(crate) fn block_lines(block: &str) -> Vec<&str> {
    block
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Block text with every line ending normalised to `\n`.
pub(crate) fn block_text(block: &str) -> String {
    block_lines(block).join("\n")
}
