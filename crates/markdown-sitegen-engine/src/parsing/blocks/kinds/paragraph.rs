/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback block type when no
/// other block matches. The whole block is parsed as inline text.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";
}
