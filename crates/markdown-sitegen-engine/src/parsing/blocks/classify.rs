use super::{
    block_lines,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies whole blocks into a [`BlockType`].
///
/// Checks run in a fixed order and the first match wins: heading, fenced
/// code, quote, unordered list, ordered list, then paragraph as fallback.
/// Classification only looks at the block text, so it is pure.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    pub fn classify(&self, block: &str) -> BlockType {
        if Heading::parse(block).is_some() {
            return BlockType::Heading;
        }
        if CodeFence::is_fenced(block) {
            return BlockType::Code;
        }

        let lines = block_lines(block);
        if lines.iter().all(|line| BlockQuote::is_quote_line(line)) {
            return BlockType::Quote;
        }
        if lines.iter().all(|line| UnorderedList::is_item(line)) {
            return BlockType::UnorderedList;
        }
        if lines
            .iter()
            .enumerate()
            .all(|(index, line)| OrderedList::is_item(line, index + 1))
        {
            return BlockType::OrderedList;
        }

        BlockType::Paragraph
    }
}
