//! Block segmentation and classification
//!
//! A block is a maximal run of contiguous non-blank source lines, with each
//! line's surrounding whitespace stripped and the lines rejoined with `\n`.
//! Classification inspects only the start of the block (generally its first
//! line); it does not validate that every line of a list block is itself a
//! list item.

use once_cell::sync::Lazy;
use regex::Regex;

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s").expect("valid ordered-item regex"));

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Default kind when nothing else matches.
    Paragraph,
    /// ATX heading with level 1-6.
    Heading(u8),
    /// Block quote (`> ` prefix).
    Quote,
    /// Fenced code block.
    Code,
    /// Unordered list (`- ` prefix).
    UnorderedList,
    /// Ordered list (`1. ` prefix).
    OrderedList,
}

/// Split raw markdown text into an ordered sequence of blocks.
///
/// Consecutive non-blank lines accumulate into one block; a blank or
/// all-whitespace line closes the current block. Empty or whitespace-only
/// input yields no blocks.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }

    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Classify a block, evaluating kinds in strict priority order.
///
/// The heading level is the count of `#` characters anywhere in the
/// whitespace-trimmed block, clamped to 6 — not just the leading run. A
/// heading whose text contains a literal `#` therefore inflates its level;
/// this matches the shipped behavior and is pinned by tests.
pub fn classify(block: &str) -> BlockKind {
    let trimmed = block.trim_start();
    if trimmed.starts_with('#') {
        let level = trimmed.matches('#').count().min(6) as u8;
        return BlockKind::Heading(level);
    }

    if block.starts_with("> ") {
        return BlockKind::Quote;
    }

    let lines: Vec<&str> = block.trim().lines().collect();
    if lines.len() >= 2
        && lines[0].starts_with("```")
        && lines[lines.len() - 1].starts_with("```")
    {
        return BlockKind::Code;
    }

    if block.starts_with("- ") {
        return BlockKind::UnorderedList;
    }

    if ORDERED_ITEM.is_match(block) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}
