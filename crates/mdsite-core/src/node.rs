//! HTML node tree
//!
//! This module defines the node types for representing an HTML document
//! fragment. The tree is a closed sum type: a node is either a [`Leaf`]
//! holding text or a [`Parent`] holding an ordered sequence of children.
//! A parent exclusively owns its children; there are no back references.
//!
//! [`Leaf`]: HtmlNode::Leaf
//! [`Parent`]: HtmlNode::Parent

use indexmap::IndexMap;

/// Node attributes, keyed by attribute name.
///
/// Insertion order is preserved here; the renderer sorts keys
/// lexicographically so output is deterministic either way.
pub type Attributes = IndexMap<String, String>;

/// A node in the output HTML tree.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// A node holding rendered text.
    ///
    /// A leaf with no tag renders its value verbatim, which is how plain
    /// text runs appear between formatted siblings without a wrapper
    /// element. A leaf with a tag renders its value as sole content.
    /// The value is optional only so the renderer can report a missing one;
    /// every constructor sets it.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },

    /// A node holding an ordered sequence of child nodes.
    ///
    /// A parent must have a non-empty tag. A parent with no children is
    /// legal and renders as an empty element pair.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// Create a tagless leaf for a plain text run.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// Create a tagged leaf.
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// Create a parent with the given children.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the same name.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        let attrs = match &mut self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        };
        attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Get the tag name, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        let attrs = match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        };
        attrs.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_leaf() {
        let node = HtmlNode::text("Hello World");
        assert_eq!(node.tag(), None);
        assert_eq!(
            node,
            HtmlNode::Leaf {
                tag: None,
                value: Some("Hello World".to_string()),
                attrs: Attributes::new(),
            }
        );
    }

    #[test]
    fn test_tagged_leaf() {
        let node = HtmlNode::leaf("b", "bold");
        assert_eq!(node.tag(), Some("b"));
    }

    #[test]
    fn test_with_attr() {
        let node = HtmlNode::leaf("a", "Link").with_attr("href", "https://example.com");
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("title"), None);
    }

    #[test]
    fn test_with_attr_replaces() {
        let node = HtmlNode::leaf("a", "Link")
            .with_attr("href", "first")
            .with_attr("href", "second");
        assert_eq!(node.attr("href"), Some("second"));
    }

    #[test]
    fn test_parent_owns_children() {
        let node = HtmlNode::parent("div", vec![HtmlNode::text("a"), HtmlNode::leaf("i", "b")]);
        match node {
            HtmlNode::Parent { tag, children, .. } => {
                assert_eq!(tag, "div");
                assert_eq!(children.len(), 2);
            }
            HtmlNode::Leaf { .. } => panic!("expected parent"),
        }
    }
}
