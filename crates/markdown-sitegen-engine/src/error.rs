/// Everything that can abort the conversion of a single markdown document.
///
/// There is no recovery inside the pipeline: the first error surfaces to the
/// caller and no partial HTML is produced for that document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// An inline delimiter pair (`**`, `__` or `` ` ``) was left unterminated.
    #[error("Unmatched `{delimiter}` delimiter in: {text}")]
    MalformedInlineMarkup {
        delimiter: &'static str,
        text: String,
    },
    #[error("Leaf node has no value")]
    MissingValue,
    #[error("Parent node has no tag")]
    MissingTag,
    #[error("Parent node has no children")]
    MissingChildren,
    #[error("No heading found in markdown")]
    NoHeadingFound,
}
