use crate::{
    error::RenderError,
    html::{HtmlNode, LeafNode},
};

use super::{
    parser::tokenize,
    types::{SpanKind, TextSpan},
};

/// Maps a typed span to the leaf node that renders it.
///
/// The match is exhaustive over [`SpanKind`], so there is no unsupported kind
/// to report at runtime.
pub fn span_to_html_node(span: TextSpan) -> HtmlNode {
    let TextSpan { text, kind, url } = span;
    let url = url.unwrap_or_default();
    let leaf = match kind {
        SpanKind::Text => LeafNode::text(text),
        SpanKind::Bold => LeafNode::new("b", text),
        SpanKind::Italic => LeafNode::new("i", text),
        SpanKind::Code => LeafNode::new("code", text),
        SpanKind::Link => LeafNode::new("a", text).with_attribute("href", url),
        SpanKind::Image => LeafNode::new("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", text),
    };
    leaf.into()
}

/// Tokenizes inline text and converts every span to a node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, RenderError> {
    Ok(tokenize(text)?.into_iter().map(span_to_html_node).collect())
}
