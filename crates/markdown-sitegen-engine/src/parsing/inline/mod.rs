//! # Inline Parsing
//!
//! Turns the inline text of a block into typed spans, then into leaf nodes.
//!
//! ## Architecture
//!
//! Tokenizing is a fixed, ordered list of splitting passes threaded through an
//! accumulator of spans. Each pass only splits spans that are still plain text,
//! so whatever an earlier pass claimed is never re-read by a later one.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and the closed `SpanKind` enum
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`parser`**: `tokenize()` and the pass pipeline
//! - **`convert`**: span to `HtmlNode` mapping
//!
//! ## Pass Precedence
//!
//! Images, links, bold `**`, bold `__`, italic `_`, italic `*`, code.
//! Links and images always win over emphasis, and bold always wins over italic
//! for a shared marker character. Nested styles are not supported.

pub mod convert;
pub mod kinds;
pub mod parser;
pub mod types;

pub use convert::{span_to_html_node, text_to_children};
pub use parser::tokenize;
pub use types::{SpanKind, TextSpan};
