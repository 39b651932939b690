//! Markdown to HTML rendering for a small, strict markdown dialect.
//!
//! The pipeline splits a document into blank-line separated blocks,
//! classifies each block, tokenizes its inline text into typed spans and
//! builds an [`HtmlNode`] tree that serializes itself to HTML.
//!
//! ```
//! use markdown_sitegen_engine::markdown_to_html_node;
//!
//! let html = markdown_to_html_node("# Hello\n\nSome **bold** text")
//!     .and_then(|node| node.to_html())
//!     .unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```

pub mod error;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::RenderError;
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use parsing::{
    blocks::{BlockType, MarkdownBlockClassifier, block_to_html_node, markdown_to_blocks},
    extract_title,
    inline::{SpanKind, TextSpan, span_to_html_node, text_to_children, tokenize},
    markdown_to_html_node,
};
pub use site::{Page, SiteError, SiteOptions, SiteReport, Template, build_site, render_page};
