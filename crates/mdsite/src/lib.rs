//! # mdsite
//!
//! Convert markdown documents to HTML node trees.
//!
//! The pipeline runs in four stages, each a pure function over resident
//! text:
//!
//! ```text
//! raw text ──▶ blocks ──▶ kinds ──▶ inline spans ──▶ HtmlNode tree
//!  (split_blocks)  (classify)   (parse_inline)    (convert)
//! ```
//!
//! No stage performs I/O or retains state between documents, so converting
//! many documents in parallel needs no synchronization.
//!
//! ## Example
//!
//! ```rust
//! use mdsite::convert;
//! use mdsite_core::render;
//!
//! let tree = convert("# Title\n\nThis is **bold** text.");
//! let html = render(&tree).unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>This is <b>bold</b> text.</p></div>");
//! ```

pub mod block;
pub mod inline;

mod convert;

pub use block::{classify, split_blocks, BlockKind};
pub use convert::convert;
pub use inline::{parse_inline, split_on_delimiter, FormatError, SpanKind, TextSpan};

// Re-exported so callers can render without naming the core crate.
pub use mdsite_core::{render, HtmlNode, RenderError};
