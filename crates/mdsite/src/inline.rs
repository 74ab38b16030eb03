//! Inline span resolution
//!
//! Resolves a block's text into an ordered sequence of typed spans covering
//! the whole input. Images and links are extracted first with a single
//! regex pass each; emphasis is then resolved recursively with a fixed
//! delimiter priority: inline code, then bold, then italic.
//!
//! The priority is type-based, not position-based: the first delimiter TYPE
//! with any match in the text wins, even if a lower-priority marker occurs
//! earlier in the string. When a formatted run itself contains further
//! special text, the inner formatting is intentionally flattened: its raw
//! text is concatenated and wrapped in a single span of the outer kind.
//! Stray unpaired delimiters never fail; the text is emitted as literal
//! content.

use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("valid image regex"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("valid link regex"));
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").expect("valid code regex"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.*?)_").expect("valid italic regex"));

/// The formatting kind of a text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Normal,
    Bold,
    Italic,
    Code,
    /// Link; the span content is the link text.
    Link { url: String },
    /// Image; the span content is the alt text.
    Image { url: String },
}

/// A contiguous run of inline text tagged with one formatting kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn normal(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Normal)
    }

    pub fn is_normal(&self) -> bool {
        self.kind == SpanKind::Normal
    }
}

/// Error from [`split_on_delimiter`] when a delimiter is unmatched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unmatched delimiter {delimiter:?} in {text:?}")]
pub struct FormatError {
    pub delimiter: String,
    pub text: String,
}

/// Resolve a block's text into an ordered sequence of typed spans.
pub fn parse_inline(text: &str) -> Vec<TextSpan> {
    let spans = vec![TextSpan::normal(text)];

    // Images and links first; they take priority and are never nested.
    let spans = split_images(spans);
    let spans = split_links(spans);

    resolve_emphasis(spans)
}

fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let mut out = Vec::new();

    for span in spans {
        if !span.is_normal() {
            out.push(span);
            continue;
        }

        let text = &span.content;
        let mut pos = 0;
        for caps in IMAGE.captures_iter(text) {
            let (Some(m), Some(alt), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            if m.start() > pos {
                out.push(TextSpan::normal(&text[pos..m.start()]));
            }
            out.push(TextSpan::new(
                alt.as_str(),
                SpanKind::Image {
                    url: url.as_str().to_string(),
                },
            ));
            pos = m.end();
        }

        if pos < text.len() {
            out.push(TextSpan::normal(&text[pos..]));
        }
    }

    out
}

fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let mut out = Vec::new();

    for span in spans {
        if !span.is_normal() {
            out.push(span);
            continue;
        }

        let text = &span.content;
        let mut pos = 0;
        for caps in LINK.captures_iter(text) {
            let (Some(m), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            // Image syntax must not double-match as a link. The regex crate
            // has no lookbehind, so skip matches directly preceded by '!';
            // the skipped text stays in the surrounding normal run.
            if m.start() > 0 && text.as_bytes()[m.start() - 1] == b'!' {
                continue;
            }

            if m.start() > pos {
                out.push(TextSpan::normal(&text[pos..m.start()]));
            }
            out.push(TextSpan::new(
                label.as_str(),
                SpanKind::Link {
                    url: url.as_str().to_string(),
                },
            ));
            pos = m.end();
        }

        if pos < text.len() {
            out.push(TextSpan::normal(&text[pos..]));
        }
    }

    out
}

fn resolve_emphasis(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let mut out = Vec::new();

    for span in spans {
        if !span.is_normal() {
            out.push(span);
            continue;
        }
        emphasize(&span.content, &mut out);
    }

    out
}

/// Recursive emphasis resolution for one run of normal text.
///
/// Tries each delimiter type in priority order and processes the leftmost
/// match of the first type that matches at all. `before` and `after`
/// re-enter the full priority search. The matched inner text is resolved
/// recursively: a single resulting span is retyped to the current
/// delimiter's kind (discarding any inner kind); multiple resulting spans
/// are flattened back to their raw text under the current kind.
fn emphasize(text: &str, out: &mut Vec<TextSpan>) {
    let delimiters: [(&Regex, usize, SpanKind); 3] = [
        (&*CODE, 1, SpanKind::Code),
        (&*BOLD, 2, SpanKind::Bold),
        (&*ITALIC, 1, SpanKind::Italic),
    ];

    for (pattern, width, kind) in delimiters {
        let Some(m) = pattern.find(text) else {
            continue;
        };

        let before = &text[..m.start()];
        let inner = &text[m.start() + width..m.end() - width];
        let after = &text[m.end()..];

        if !before.is_empty() {
            emphasize(before, out);
        }

        let mut inner_spans = Vec::new();
        emphasize(inner, &mut inner_spans);
        if inner_spans.len() == 1 {
            let mut only = inner_spans.remove(0);
            only.kind = kind;
            out.push(only);
        } else {
            let content: String = inner_spans.iter().map(|s| s.content.as_str()).collect();
            out.push(TextSpan::new(content, kind));
        }

        if !after.is_empty() {
            emphasize(after, out);
        }

        return;
    }

    out.push(TextSpan::normal(text));
}

/// Split spans on an exact-string delimiter, alternating normal and typed
/// output.
///
/// A standalone utility, not used by the document pipeline. Splitting a
/// span on the delimiter must yield an odd number of pieces (an even count
/// implies an unmatched delimiter) or the call fails with [`FormatError`].
/// Spans that are already typed pass through untouched. Empty pieces are
/// kept, so delimiters at the edges of the text produce empty normal spans.
pub fn split_on_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, FormatError> {
    let mut out = Vec::new();

    for span in spans {
        if !span.is_normal() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(FormatError {
                delimiter: delimiter.to_string(),
                text: span.content.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 0 {
                out.push(TextSpan::normal(part));
            } else {
                out.push(TextSpan::new(part, kind.clone()));
            }
        }
    }

    Ok(out)
}
