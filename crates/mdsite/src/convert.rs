//! Document tree construction
//!
//! Maps classified blocks and their resolved spans into `HtmlNode` subtrees
//! and composes them under a root `div`. Each block kind has its own
//! preprocessing before inline resolution; code blocks bypass inline
//! resolution entirely and keep their content literal.

use once_cell::sync::Lazy;
use regex::Regex;

use mdsite_core::HtmlNode;

use crate::block::{classify, split_blocks, BlockKind};
use crate::inline::{parse_inline, SpanKind, TextSpan};

static ITEM_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("valid item-prefix regex"));

/// Convert markdown text into an HTML node tree rooted at a `div`.
///
/// Empty input produces an empty root, which renders as `<div></div>`.
pub fn convert(markdown: &str) -> HtmlNode {
    let children = split_blocks(markdown)
        .iter()
        .map(|block| match classify(block) {
            BlockKind::Paragraph => paragraph_node(block),
            BlockKind::Heading(level) => heading_node(block, level),
            BlockKind::Quote => quote_node(block),
            BlockKind::Code => code_node(block),
            BlockKind::UnorderedList => unordered_list_node(block),
            BlockKind::OrderedList => ordered_list_node(block),
        })
        .collect();

    HtmlNode::parent("div", children)
}

fn span_to_node(span: TextSpan) -> HtmlNode {
    match span.kind {
        SpanKind::Normal => HtmlNode::text(span.content),
        SpanKind::Bold => HtmlNode::leaf("b", span.content),
        SpanKind::Italic => HtmlNode::leaf("i", span.content),
        SpanKind::Code => HtmlNode::leaf("code", span.content),
        SpanKind::Link { url } => HtmlNode::leaf("a", span.content).with_attr("href", &url),
        SpanKind::Image { url } => HtmlNode::leaf("img", "")
            .with_attr("src", &url)
            .with_attr("alt", &span.content),
    }
}

fn spans_to_nodes(text: &str) -> Vec<HtmlNode> {
    parse_inline(text).into_iter().map(span_to_node).collect()
}

fn paragraph_node(block: &str) -> HtmlNode {
    // Internal line breaks become single spaces.
    HtmlNode::parent("p", spans_to_nodes(&block.replace('\n', " ")))
}

fn heading_node(block: &str, level: u8) -> HtmlNode {
    // Drop as many leading characters as the level says; the level counts
    // every '#' in the block, so this slices the leading run for ordinary
    // headings and slightly more for the degenerate ones.
    let stripped = block.trim_start();
    let content = stripped
        .char_indices()
        .nth(level as usize)
        .map_or("", |(i, _)| &stripped[i..])
        .trim();

    HtmlNode::parent(&format!("h{level}"), spans_to_nodes(content))
}

fn quote_node(block: &str) -> HtmlNode {
    let text = block
        .lines()
        .map(|line| line.trim_start_matches(['>', ' ']).trim())
        .collect::<Vec<_>>()
        .join(" ");

    HtmlNode::parent("blockquote", spans_to_nodes(&text))
}

fn code_node(block: &str) -> HtmlNode {
    let lines: Vec<&str> = block.lines().collect();
    // Strip the surrounding fence lines; content is kept literal.
    let code = match lines.as_slice() {
        [first, inner @ .., _last] if first.starts_with("```") => inner.join("\n"),
        _ => lines.join("\n"),
    };

    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", code)])
}

fn unordered_list_node(block: &str) -> HtmlNode {
    let items = block
        .lines()
        .map(|line| line.trim_start_matches(['-', ' ']).trim());

    list_node("ul", items)
}

fn ordered_list_node(block: &str) -> HtmlNode {
    let items = block
        .lines()
        .map(|line| ITEM_PREFIX.replace(line, ""))
        .collect::<Vec<_>>();

    list_node("ol", items.iter().map(|item| item.trim()))
}

fn list_node<'a>(tag: &str, items: impl Iterator<Item = &'a str>) -> HtmlNode {
    let children = items
        .filter(|item| !item.is_empty())
        .map(|item| HtmlNode::parent("li", spans_to_nodes(item)))
        .collect();

    HtmlNode::parent(tag, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdsite_core::render;

    fn to_html(markdown: &str) -> String {
        render(&convert(markdown)).unwrap()
    }

    #[test]
    fn test_empty_input_renders_empty_div() {
        assert_eq!(to_html(""), "<div></div>");
        assert_eq!(to_html("  \n \n\t"), "<div></div>");
    }

    #[test]
    fn test_round_trip_document() {
        let markdown = "# Title\n\nThis is **bold** and _italic_ and `code`.";
        assert_eq!(
            to_html(markdown),
            "<div><h1>Title</h1><p>This is <b>bold</b> and <i>italic</i> and <code>code</code>.</p></div>"
        );
    }

    #[test]
    fn test_heading_levels_clamp_to_six() {
        assert_eq!(to_html("###### Deep"), "<div><h6>Deep</h6></div>");
        // Seven hashes clamp to level 6, so only six characters are
        // stripped and the seventh stays in the text.
        assert_eq!(to_html("####### Deeper"), "<div><h6># Deeper</h6></div>");
    }

    #[test]
    fn test_paragraph_folds_line_breaks() {
        assert_eq!(to_html("one\ntwo"), "<div><p>one two</p></div>");
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            to_html("> quoted line\n> another"),
            "<div><blockquote>quoted line another</blockquote></div>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(to_html("- a\n- b"), "<div><ul><li>a</li><li>b</li></ul></div>");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            to_html("1. first\n2. second"),
            "<div><ol><li>first</li><li>second</li></ol></div>"
        );
    }

    #[test]
    fn test_list_drops_empty_items() {
        assert_eq!(to_html("- a\n-\n- b"), "<div><ul><li>a</li><li>b</li></ul></div>");
    }

    #[test]
    fn test_code_fence_keeps_content_literal() {
        assert_eq!(
            to_html("```\nx = 1\n```"),
            "<div><pre><code>x = 1</code></pre></div>"
        );
        // No inline parsing inside a fence.
        assert_eq!(
            to_html("```\n**x**\n```"),
            "<div><pre><code>**x**</code></pre></div>"
        );
    }

    #[test]
    fn test_link_and_image_nodes() {
        assert_eq!(
            to_html("![a](u1) and [b](u2)"),
            "<div><p><img alt=\"a\" src=\"u1\"></img> and <a href=\"u2\">b</a></p></div>"
        );
    }

    #[test]
    fn test_multiple_blocks_keep_document_order() {
        let markdown = "# Title\n\npara\n\n- item";
        assert_eq!(
            to_html(markdown),
            "<div><h1>Title</h1><p>para</p><ul><li>item</li></ul></div>"
        );
    }
}
