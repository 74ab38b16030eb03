//! HTML tree serialization
//!
//! Converts an [`HtmlNode`] tree into an HTML string. No escaping is applied
//! to text or attribute values; the pipeline treats document text as already
//! renderable. Attributes are emitted in lexicographic key order so output
//! is deterministic.

use crate::node::{Attributes, HtmlNode};
use crate::RenderError;

/// Serialize a node tree to an HTML string.
///
/// Fails with [`RenderError::MissingValue`] if a leaf has no value and with
/// [`RenderError::MissingTag`] if a parent has an empty tag. A parent with
/// no children logs a warning and renders as an empty element pair.
pub fn render(node: &HtmlNode) -> Result<String, RenderError> {
    let mut out = String::with_capacity(256);
    render_node(node, &mut out)?;
    Ok(out)
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<(), RenderError> {
    match node {
        HtmlNode::Leaf { tag, value, attrs } => {
            let value = value.as_deref().ok_or(RenderError::MissingValue)?;

            match tag {
                None => out.push_str(value),
                Some(tag) => {
                    open_tag(tag, attrs, out);
                    out.push_str(value);
                    close_tag(tag, out);
                }
            }
        }

        HtmlNode::Parent {
            tag,
            children,
            attrs,
        } => {
            if tag.is_empty() {
                return Err(RenderError::MissingTag);
            }
            if children.is_empty() {
                tracing::warn!(tag = %tag, "parent node has no children");
            }

            open_tag(tag, attrs, out);
            for child in children {
                render_node(child, out)?;
            }
            close_tag(tag, out);
        }
    }

    Ok(())
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);

    let mut pairs: Vec<(&String, &String)> = attrs.iter().collect();
    pairs.sort_by_key(|(name, _)| name.as_str());

    for (name, value) in pairs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }

    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
