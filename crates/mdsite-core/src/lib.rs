//! mdsite-core - HTML node tree and rendering
//!
//! This crate provides the output-side data structures for mdsite: a closed
//! tree of HTML nodes and the serializer that turns a tree into an HTML
//! string. It knows nothing about markdown; the `mdsite` crate builds these
//! trees from parsed documents.
//!
//! # Architecture
//!
//! ```text
//! Markdown ──mdsite──▶ ┌───────────────┐
//!                      │ HtmlNode tree │ ──render──▶ HTML String
//!                      └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::{render, HtmlNode};
//!
//! let tree = HtmlNode::parent(
//!     "div",
//!     vec![HtmlNode::parent(
//!         "p",
//!         vec![
//!             HtmlNode::text("This is "),
//!             HtmlNode::leaf("b", "bold"),
//!             HtmlNode::text(" text."),
//!         ],
//!     )],
//! );
//!
//! let html = render(&tree).unwrap();
//! assert_eq!(html, "<div><p>This is <b>bold</b> text.</p></div>");
//! ```

mod node;
mod render;

pub use node::{Attributes, HtmlNode};
pub use render::render;

/// Error type for rendering an [`HtmlNode`] tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A tagged leaf reached the renderer without a value.
    #[error("leaf node must have a value")]
    MissingValue,

    /// A parent reached the renderer without a tag.
    #[error("parent node must have a tag")]
    MissingTag,
}

pub type Result<T> = std::result::Result<T, RenderError>;
