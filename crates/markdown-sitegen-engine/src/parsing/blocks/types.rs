/// The kind of a block. Every block has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `#` to `######` followed by a space.
    Heading,
    /// Body between two bare ```` ``` ```` fence lines.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in sequence.
    OrderedList,
    /// Default when no other type matches.
    Paragraph,
}
