use std::path::Path;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::io::{self, IoError};

fn root_reference() -> &'static Regex {
    static ROOT_REFERENCE: OnceLock<Regex> = OnceLock::new();
    ROOT_REFERENCE.get_or_init(|| {
        Regex::new(r#"(href|src)="/(/?)"#).expect("Invalid reference regex")
    })
}

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load(path: &Path) -> Result<Self, IoError> {
        Ok(Self::new(io::read_path(path)?))
    }

    /// Fills every placeholder, then rewrites root-relative `href`/`src`
    /// references to start with `base_path`.
    pub fn render(&self, title: &str, content: &str, base_path: &str) -> String {
        let page = self
            .text
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content);
        rewrite_base_path(&page, base_path)
    }
}

/// Prefixes `href="/...` and `src="/...` with `base_path`.
///
/// A base path of `/` (or empty) leaves the page unchanged. A missing
/// trailing slash on the base path is added. Protocol-relative references
/// (`//host/...`) are left alone.
pub fn rewrite_base_path(page: &str, base_path: &str) -> String {
    if base_path.is_empty() || base_path == "/" {
        return page.to_string();
    }
    let base = if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    };
    root_reference()
        .replace_all(page, |caps: &Captures<'_>| {
            if caps[2].is_empty() {
                format!("{}=\"{base}", &caps[1])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::TEST_TEMPLATE;
    use insta::assert_snapshot;

    #[test]
    fn fills_placeholders() {
        let template = Template::new(TEST_TEMPLATE);
        assert_snapshot!(
            template.render("Home", "<div><p>hi</p></div>", "/"),
            @r#"<html><head><title>Home</title><link href="/index.css" rel="stylesheet"></head><body><div><p>hi</p></div></body></html>"#
        );
    }

    #[test]
    fn fills_every_occurrence() {
        let template = Template::new("{{ Title }}|{{ Title }}|{{ Content }}");
        assert_eq!(template.render("T", "C", "/"), "T|T|C");
    }

    #[test]
    fn rewrites_root_relative_references() {
        let template = Template::new(TEST_TEMPLATE);
        let content = r#"<a href="/blog">b</a><img src="/logo.png" alt=""></img>"#;
        assert_snapshot!(
            template.render("Home", content, "/docs/"),
            @r#"<html><head><title>Home</title><link href="/docs/index.css" rel="stylesheet"></head><body><a href="/docs/blog">b</a><img src="/docs/logo.png" alt=""></img></body></html>"#
        );
    }

    #[test]
    fn base_path_gets_trailing_slash() {
        assert_eq!(
            rewrite_base_path(r#"<a href="/x">x</a>"#, "/repo"),
            r#"<a href="/repo/x">x</a>"#
        );
    }

    #[test]
    fn protocol_relative_urls_are_untouched() {
        let link = r#"<link href="//cdn.example.com/x.css">"#;
        let image = r#"<img src="//cdn.example.com/a.png" alt=""></img>"#;
        assert_eq!(rewrite_base_path(link, "/site/"), link);
        assert_eq!(rewrite_base_path(image, "/site/"), image);
    }

    #[test]
    fn root_and_protocol_relative_mixed() {
        assert_eq!(
            rewrite_base_path(r#"<a href="/a">a</a><a href="//b.com/">b</a>"#, "/site"),
            r#"<a href="/site/a">a</a><a href="//b.com/">b</a>"#
        );
    }

    #[test]
    fn absolute_urls_are_untouched() {
        let page = r#"<a href="https://example.com/">e</a>"#;
        assert_eq!(rewrite_base_path(page, "/repo/"), page);
    }
}
