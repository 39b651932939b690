//! # Site Generation
//!
//! File-system glue around the rendering pipeline: copies static assets,
//! renders every markdown file under the content directory, fills the page
//! template and writes the result to the output directory with the same
//! relative layout.

pub mod page;
pub mod template;

pub use page::{Page, render_page};
pub use template::{Template, rewrite_base_path};

use relative_path::RelativePathBuf;
use std::path::{Path, PathBuf};

use crate::{
    error::RenderError,
    io::{self, IoError},
    models::ContentFile,
};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to render {path}: {source}")]
    Render { path: PathBuf, source: RenderError },
}

/// Where a site build reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    /// Prefix for root-relative links, `/` for a site served at the root.
    pub base_path: String,
}

/// What a site build produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteReport {
    /// Static files copied into the output directory.
    pub copied: Vec<PathBuf>,
    /// Generated pages, relative to the output directory.
    pub pages: Vec<RelativePathBuf>,
}

/// Renders one markdown file through `template` and writes it to `dest_path`.
pub fn generate_page(
    content_path: &Path,
    template: &Template,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {}",
        content_path.display(),
        dest_path.display()
    );

    let markdown = io::read_path(content_path)?;
    let page = render_page(&markdown).map_err(|source| SiteError::Render {
        path: content_path.to_path_buf(),
        source,
    })?;
    let html = template.render(&page.title, &page.content, base_path);
    io::write_path(dest_path, &html)?;
    Ok(())
}

/// Generates a page for every `.md` file under `content_dir`.
///
/// `a/b.md` is written to `dest_dir/a/b.html`. Files are processed in sorted
/// order and the first failure stops the run.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<RelativePathBuf>, SiteError> {
    let mut pages = Vec::new();
    for path in io::scan_markdown_files(content_dir)? {
        let file = ContentFile::from_path(&path, content_dir)?;
        let dest_path = file.output_path().to_path(dest_dir);
        generate_page(&path, template, &dest_path, base_path)?;
        pages.push(file.output_path().to_relative_path_buf());
    }
    Ok(pages)
}

/// Builds the whole site: static assets first, then every page.
///
/// The output directory is replaced by a fresh copy of the static directory.
/// The template and content directory are checked first, so a build that
/// cannot start leaves the previous output untouched.
pub fn build_site(options: &SiteOptions) -> Result<SiteReport, SiteError> {
    let template = Template::load(&options.template_path)?;
    io::validate_content_dir(&options.content_dir)?;

    log::info!(
        "Copying static files from {} to {}",
        options.static_dir.display(),
        options.output_dir.display()
    );
    let copied = io::copy_directory(&options.static_dir, &options.output_dir)?;

    log::info!("Generating pages from {}", options.content_dir.display());
    let pages = generate_pages_recursive(
        &options.content_dir,
        &template,
        &options.output_dir,
        &options.base_path,
    )?;

    log::info!(
        "Site complete: {} static files, {} pages",
        copied.len(),
        pages.len()
    );
    Ok(SiteReport { copied, pages })
}
