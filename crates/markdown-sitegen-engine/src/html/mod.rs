//! # HTML Node Tree
//!
//! A minimal tree of renderable HTML.
//!
//! ## Variants
//!
//! - **`LeafNode`**: optional tag, a text value and attributes. No tag means the
//!   value is emitted as raw text with no wrapping element.
//! - **`ParentNode`**: a tag, ordered children and attributes.
//!
//! `HtmlNode` is the closed union of the two and serializes itself with
//! [`HtmlNode::to_html`]. Values and attribute strings are written verbatim:
//! nothing is HTML-escaped.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode};
