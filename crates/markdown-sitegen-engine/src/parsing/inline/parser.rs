use std::ops::Range;

use regex::Captures;

use crate::error::RenderError;

use super::{
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::{SpanKind, TextSpan},
};

type Pass = fn(Vec<TextSpan>) -> Result<Vec<TextSpan>, RenderError>;

/// Splitting passes, applied in this order.
///
/// The order is the precedence contract:
/// 1. images, so `![alt](url)` is never read as `!` followed by a link
/// 2. links
/// 3. bold `**`
/// 4. bold `__`
/// 5. italic `_`
/// 6. italic `*`
/// 7. code `` ` ``
///
/// Bold runs before italic, so `**x**` is never split as two single-star
/// markers. Each pass only touches spans still marked as text.
const PASSES: [Pass; 7] = [
    split_images,
    split_links,
    split_bold_stars,
    split_bold_underscores,
    split_italic_underscores,
    split_italic_stars,
    split_code,
];

/// Splits raw inline text into typed spans, preserving document order.
///
/// # Errors
/// [`RenderError::MalformedInlineMarkup`] if a `**`, `__` or `` ` `` pair is
/// left open inside a text span.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, RenderError> {
    PASSES
        .iter()
        .try_fold(vec![TextSpan::text(text)], |spans, pass| pass(spans))
}

fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, RenderError> {
    Ok(split_matches(spans, |text, from| {
        let caps = Image::pattern().captures_at(text, from)?;
        Some(matched(&caps, TextSpan::image(&caps[1], &caps[2])))
    }))
}

fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, RenderError> {
    Ok(split_matches(spans, |text, from| {
        let caps = Link::captures_at(text, from)?;
        Some(matched(&caps, TextSpan::link(&caps[1], &caps[2])))
    }))
}

fn split_bold_stars(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, RenderError> {
    split_delimiter(spans, Bold::STARS, SpanKind::Bold)
}

fn split_bold_underscores(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, RenderError> {
    split_delimiter(spans, Bold::UNDERSCORES, SpanKind::Bold)
}

fn split_italic_underscores(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, RenderError> {
    Ok(split_matches(spans, |text, from| {
        let caps = Italic::underscore_pattern().captures_at(text, from)?;
        Some(matched(&caps, TextSpan::new(&caps[1], SpanKind::Italic)))
    }))
}

fn split_italic_stars(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, RenderError> {
    Ok(split_matches(spans, |text, from| {
        let caps = Italic::star_pattern().captures_at(text, from)?;
        Some(matched(&caps, TextSpan::new(&caps[1], SpanKind::Italic)))
    }))
}

fn split_code(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, RenderError> {
    split_delimiter(spans, CodeSpan::TICK, SpanKind::Code)
}

fn matched(caps: &Captures<'_>, span: TextSpan) -> (Range<usize>, TextSpan) {
    let range = caps.get(0).map_or(0..0, |m| m.range());
    (range, span)
}

/// Splits text spans on a literal delimiter.
///
/// Odd-indexed segments lie between a pair of delimiters and take `kind`.
/// An even segment count means a delimiter was never closed. Empty segments
/// are dropped.
fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, RenderError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let segments: Vec<&str> = span.text.split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(RenderError::MalformedInlineMarkup {
                delimiter,
                text: span.text.clone(),
            });
        }

        for (index, segment) in segments.into_iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            let segment_kind = if index % 2 == 0 { SpanKind::Text } else { kind };
            out.push(TextSpan::new(segment, segment_kind));
        }
    }
    Ok(out)
}

/// Splits text spans around every match reported by `find`.
///
/// `find(text, from)` returns the byte range of the leftmost match at or
/// after `from` together with the span it produces. Text between matches is
/// kept as plain text when non-empty.
fn split_matches<F>(spans: Vec<TextSpan>, find: F) -> Vec<TextSpan>
where
    F: Fn(&str, usize) -> Option<(Range<usize>, TextSpan)>,
{
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut last = 0;
        while let Some((range, found)) = find(text, last) {
            if range.start > last {
                out.push(TextSpan::text(&text[last..range.start]));
            }
            out.push(found);
            last = range.end;
            if range.is_empty() {
                break;
            }
        }
        if last < text.len() {
            out.push(TextSpan::text(&text[last..]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn span(text: &str, kind: SpanKind) -> TextSpan {
        TextSpan::new(text, kind)
    }

    #[test]
    fn plain_text_is_a_single_span() {
        assert_eq!(
            tokenize("just some words").unwrap(),
            vec![TextSpan::text("just some words")]
        );
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn every_kind_in_one_line() {
        let spans = tokenize(
            "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)",
        )
        .unwrap();

        assert_eq!(
            spans,
            vec![
                TextSpan::text("This is "),
                span("text", SpanKind::Bold),
                TextSpan::text(" with an "),
                span("italic", SpanKind::Italic),
                TextSpan::text(" word and a "),
                span("code block", SpanKind::Code),
                TextSpan::text(" and an "),
                TextSpan::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                TextSpan::text(" and a "),
                TextSpan::link("link", "https://boot.dev"),
            ]
        );
    }

    #[rstest]
    #[case("**bold**", vec![span("bold", SpanKind::Bold)])]
    #[case("__bold__", vec![span("bold", SpanKind::Bold)])]
    #[case("_italic_", vec![span("italic", SpanKind::Italic)])]
    #[case("*italic*", vec![span("italic", SpanKind::Italic)])]
    #[case("`code`", vec![span("code", SpanKind::Code)])]
    #[case(
        "multiple **one** and **two**",
        vec![
            TextSpan::text("multiple "),
            span("one", SpanKind::Bold),
            TextSpan::text(" and "),
            span("two", SpanKind::Bold),
        ]
    )]
    #[case(
        "This is *italic* and __bold__",
        vec![
            TextSpan::text("This is "),
            span("italic", SpanKind::Italic),
            TextSpan::text(" and "),
            span("bold", SpanKind::Bold),
        ]
    )]
    fn single_delimiter_kinds(#[case] input: &str, #[case] expected: Vec<TextSpan>) {
        assert_eq!(tokenize(input).unwrap(), expected);
    }

    #[rstest]
    #[case("**bold", "**")]
    #[case("a __b", "__")]
    #[case("open ` tick", "`")]
    fn unterminated_pair_fails(#[case] input: &str, #[case] delimiter: &str) {
        match tokenize(input) {
            Err(RenderError::MalformedInlineMarkup { delimiter: d, .. }) => {
                assert_eq!(d, delimiter)
            }
            other => panic!("expected MalformedInlineMarkup, got {other:?}"),
        }
    }

    #[test]
    fn lone_italic_markers_stay_text() {
        assert_eq!(
            tokenize("2 * 3 and a_b").unwrap(),
            vec![TextSpan::text("2 * 3 and a_b")]
        );
    }

    #[test]
    fn bold_markers_win_over_italic() {
        // `*bold **text** italic*`: the bold pass takes the inner pair and
        // leaves each outer star alone in its own text span.
        assert_eq!(
            tokenize("*bold **text** italic*").unwrap(),
            vec![
                TextSpan::text("*bold "),
                span("text", SpanKind::Bold),
                TextSpan::text(" italic*"),
            ]
        );
    }

    #[test]
    fn word_internal_underscores_are_italic() {
        assert_eq!(
            tokenize("snake_case_name").unwrap(),
            vec![
                TextSpan::text("snake"),
                span("case", SpanKind::Italic),
                TextSpan::text("name"),
            ]
        );
    }

    #[test]
    fn image_is_not_read_as_link() {
        assert_eq!(
            tokenize("![alt text](img.png) then [a link](page.html)").unwrap(),
            vec![
                TextSpan::image("alt text", "img.png"),
                TextSpan::text(" then "),
                TextSpan::link("a link", "page.html"),
            ]
        );
    }

    #[test]
    fn link_text_is_not_tokenized_further() {
        assert_eq!(
            tokenize("[**not bold**](x.html)").unwrap(),
            vec![TextSpan::link("**not bold**", "x.html")]
        );
    }

    #[test]
    fn stripped_text_reconstructs_input() {
        let spans = tokenize("**a** b **c** d").unwrap();
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "a b c d");
        assert_eq!(spans.iter().filter(|s| s.kind == SpanKind::Bold).count(), 2);
    }
}
