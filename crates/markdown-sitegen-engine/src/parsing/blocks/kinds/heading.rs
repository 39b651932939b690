/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Deepest supported heading level (`<h6>`).
    pub const MAX_LEVEL: usize = 6;

    /// Splits `# text` into `(level, text)`.
    ///
    /// The block must start with 1-6 markers followed by a single space.
    /// Anything after that space, including further lines, is the text.
    pub fn parse(block: &str) -> Option<(usize, &str)> {
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let text = block[level..].strip_prefix(' ')?;
        Some((level, text))
    }

    pub fn tag(level: usize) -> String {
        format!("h{level}")
    }
}
