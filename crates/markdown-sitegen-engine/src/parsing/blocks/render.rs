use crate::{
    error::RenderError,
    html::{HtmlNode, LeafNode, ParentNode},
    parsing::inline::text_to_children,
};

use super::{
    block_lines, block_text,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockType,
};

/// Renders one classified block to a parent node.
///
/// Block markup is stripped and the remaining text is inline-parsed, except
/// for fenced code whose body is kept verbatim.
///
/// # Errors
/// Inline tokenizing errors are returned unchanged.
pub fn block_to_html_node(block: &str, block_type: BlockType) -> Result<HtmlNode, RenderError> {
    let node = match block_type {
        BlockType::Heading => match Heading::parse(block) {
            Some((level, text)) => {
                ParentNode::new(Heading::tag(level), text_to_children(&block_text(text))?)
            }
            None => paragraph(block)?,
        },
        BlockType::Code => {
            let body = CodeFence::body(block).unwrap_or_else(|| block.to_string());
            ParentNode::new("pre", vec![LeafNode::new("code", body).into()])
        }
        BlockType::Quote => {
            let text = block_lines(block)
                .into_iter()
                .map(BlockQuote::strip_prefix)
                .collect::<Vec<_>>()
                .join("\n");
            ParentNode::new("blockquote", text_to_children(&text)?)
        }
        BlockType::UnorderedList => {
            let items = block_lines(block)
                .into_iter()
                .map(|line| list_item(UnorderedList::strip_bullet(line)))
                .collect::<Result<Vec<_>, _>>()?;
            ParentNode::new("ul", items)
        }
        BlockType::OrderedList => {
            let items = block_lines(block)
                .into_iter()
                .enumerate()
                .map(|(index, line)| {
                    list_item(OrderedList::strip_marker(line, index + 1).unwrap_or(line))
                })
                .collect::<Result<Vec<_>, _>>()?;
            ParentNode::new("ol", items)
        }
        BlockType::Paragraph => paragraph(block)?,
    };
    Ok(node.into())
}

fn paragraph(block: &str) -> Result<ParentNode, RenderError> {
    let children = text_to_children(&block_text(block))?;
    Ok(ParentNode::new(Paragraph::TAG, children))
}

fn list_item(text: &str) -> Result<HtmlNode, RenderError> {
    Ok(ParentNode::new("li", text_to_children(text)?).into())
}
