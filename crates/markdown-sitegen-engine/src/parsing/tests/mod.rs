//! Document-level tests for the parsing module.
//!
//! Fixtures (.md) and their expected output (.html) are co-located in
//! `fixtures/`.

use crate::{
    error::RenderError,
    parsing::{extract_title, markdown_to_html_node},
};

// Fixture-based tests

#[test]
fn fixture_full_document() {
    assert_fixture("full_document");
}

#[test]
fn fixture_links_and_images() {
    assert_fixture("links_and_images");
}

#[test]
fn fixture_code_fence_raw_zone() {
    assert_fixture("code_fence_raw_zone");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let html = markdown_to_html_node(&md).unwrap().to_html().unwrap();
    pretty_assertions::assert_eq!(html, expected.trim_end_matches('\n'));
}

// Document rendering

#[test]
fn empty_document() {
    let html = markdown_to_html_node("").unwrap().to_html().unwrap();
    assert_eq!(html, "<div></div>");
}

#[test]
fn blank_lines_only() {
    let html = markdown_to_html_node("\n\n  \n\n").unwrap().to_html().unwrap();
    assert_eq!(html, "<div></div>");
}

#[test]
fn one_child_per_block() {
    let node = markdown_to_html_node("# a\n\nb\n\n- c").unwrap();
    let tags: Vec<_> = node.children().iter().map(|c| c.tag()).collect();
    assert_eq!(tags, vec![Some("h1"), Some("p"), Some("ul")]);
}

#[test]
fn malformed_block_aborts_document() {
    let result = markdown_to_html_node("# fine\n\nstill fine\n\nbroken `code");
    assert!(matches!(
        result,
        Err(RenderError::MalformedInlineMarkup { delimiter: "`", .. })
    ));
}

#[test]
fn mixed_nesting_golden() {
    let html = markdown_to_html_node("*bold **text** italic*").unwrap().to_html().unwrap();
    insta::assert_snapshot!(html, @"<div><p>*bold <b>text</b> italic*</p></div>");
}

#[test]
fn crlf_line_endings_render_like_lf() {
    let crlf = markdown_to_html_node("# Title\r\n\r\nplain\r\nline\r\n\r\n> a\r\n> b")
        .unwrap()
        .to_html()
        .unwrap();
    let lf = markdown_to_html_node("# Title\n\nplain\nline\n\n> a\n> b")
        .unwrap()
        .to_html()
        .unwrap();
    assert_eq!(crlf, lf);
    assert_eq!(
        crlf,
        "<div><h1>Title</h1><p>plain\nline</p><blockquote>a\nb</blockquote></div>"
    );
}

// Title extraction

#[test]
fn title_from_first_heading() {
    assert_eq!(extract_title("# Hello").unwrap(), "Hello");
}

#[test]
fn title_skips_non_heading_blocks() {
    let md = "Intro text\n\n- #not a heading\n\n## Sub title\n\n# Main";
    assert_eq!(extract_title(md).unwrap(), "Sub title");
}

#[test]
fn title_keeps_inline_markup() {
    assert_eq!(
        extract_title("# Tolkien **Fan** Club").unwrap(),
        "Tolkien **Fan** Club"
    );
}

#[test]
fn title_line_endings_are_normalised() {
    assert_eq!(extract_title("# Two\r\nlines").unwrap(), "Two\nlines");
}

#[test]
fn no_heading_found() {
    assert_eq!(
        extract_title("#nospace\n\n####### too deep\n\nplain"),
        Err(RenderError::NoHeadingFound)
    );
}
