pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::{
    error::RenderError,
    html::{HtmlNode, ParentNode},
};

use blocks::{
    BlockType, MarkdownBlockClassifier, block_text, block_to_html_node, kinds::Heading,
    markdown_to_blocks,
};

/// Renders a whole document into a single `<div>` node.
///
/// Blocks are split, classified and rendered in order. The first failing
/// block aborts the document; no partial tree is returned.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, RenderError> {
    let classifier = MarkdownBlockClassifier;
    let children = markdown_to_blocks(markdown)
        .into_iter()
        .map(|block| block_to_html_node(block, classifier.classify(block)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new("div", children).into())
}

/// Text of the first heading block, without its `#` markers.
///
/// Line endings in a multi-line heading are normalised to `\n`.
///
/// # Errors
/// [`RenderError::NoHeadingFound`] when no block classifies as a heading.
pub fn extract_title(markdown: &str) -> Result<String, RenderError> {
    let classifier = MarkdownBlockClassifier;
    markdown_to_blocks(markdown)
        .into_iter()
        .filter(|block| classifier.classify(block) == BlockType::Heading)
        .find_map(Heading::parse)
        .map(|(_, text)| block_text(text))
        .ok_or(RenderError::NoHeadingFound)
}
