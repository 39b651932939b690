use crate::{
    error::RenderError,
    parsing::{extract_title, markdown_to_html_node},
};

/// One rendered markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub content: String,
}

/// Renders a document to HTML and extracts its title.
///
/// Fails if the document cannot be rendered or has no heading.
pub fn render_page(markdown: &str) -> Result<Page, RenderError> {
    let content = markdown_to_html_node(markdown)?.to_html()?;
    let title = extract_title(markdown)?;
    Ok(Page { title, content })
}
