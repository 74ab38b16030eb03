//! Page generation
//!
//! Turns markdown files into HTML pages: convert and render the document,
//! extract its title, substitute both into the page template, and write the
//! result. The template is an explicit value passed into each call rather
//! than process-wide state, so callers can generate against different
//! templates in the same run.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use mdsite::{convert, render};

use crate::error::PageError;

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s+(.+)").expect("valid title regex"));

const TITLE_PLACEHOLDER: &str = "{{Title}}";
const CONTENT_PLACEHOLDER: &str = "{{Content}}";

/// Extract the first level-1 heading line as the page title.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    TITLE
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or(PageError::TitleNotFound)
}

/// An HTML page template with `{{Title}}` and `{{Content}}` placeholders.
///
/// Both placeholders are validated at construction; a template missing
/// either one is rejected up front instead of failing per page.
#[derive(Debug)]
pub struct PageTemplate {
    html: String,
}

impl PageTemplate {
    pub fn new(html: impl Into<String>) -> Result<Self, PageError> {
        let html = html.into();
        for placeholder in [TITLE_PLACEHOLDER, CONTENT_PLACEHOLDER] {
            if !html.contains(placeholder) {
                return Err(PageError::MissingPlaceholder { placeholder });
            }
        }
        Ok(Self { html })
    }

    pub fn load(path: &Path) -> Result<Self, PageError> {
        Self::new(fs::read_to_string(path)?)
    }

    /// Substitute the title and rendered document into the template.
    pub fn fill(&self, title: &str, content: &str) -> String {
        self.html
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

/// Generate one HTML page from a markdown file.
pub fn generate_page(
    source: &Path,
    template: &PageTemplate,
    dest: &Path,
) -> Result<(), PageError> {
    tracing::info!(source = %source.display(), dest = %dest.display(), "generating page");

    let markdown = fs::read_to_string(source)?;
    let html = render(&convert(&markdown))?;
    let title = extract_title(&markdown)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, template.fill(&title, &html))?;

    Ok(())
}

/// Generate pages for every `*.md` file under `content_dir`, mirroring the
/// directory structure into `out_dir` with an `.html` extension.
pub fn generate_pages(
    content_dir: &Path,
    template: &PageTemplate,
    out_dir: &Path,
) -> Result<(), PageError> {
    for entry in fs::read_dir(content_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            generate_pages(&path, template, &out_dir.join(entry.file_name()))?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = out_dir.join(entry.file_name()).with_extension("html");
            generate_page(&path, template, &dest)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str =
        "<html><head><title>{{Title}}</title></head><body>{{Content}}</body></html>";

    #[test]
    fn test_extract_title() {
        let md = "# This is a title\n\nThis is some content.";
        assert_eq!(extract_title(md).unwrap(), "This is a title");
    }

    #[test]
    fn test_extract_title_skips_deeper_headings() {
        let md = "## Subheading\n\n# Actual title";
        assert_eq!(extract_title(md).unwrap(), "Actual title");
    }

    #[test]
    fn test_extract_title_trims_extra_spaces() {
        let md = "#   This is a title\n\nThis is some content.";
        assert_eq!(extract_title(md).unwrap(), "This is a title");
    }

    #[test]
    fn test_extract_title_missing() {
        assert!(matches!(
            extract_title("This is some content."),
            Err(PageError::TitleNotFound)
        ));
        assert!(matches!(extract_title(""), Err(PageError::TitleNotFound)));
    }

    #[test]
    fn test_template_requires_both_placeholders() {
        assert!(PageTemplate::new(TEMPLATE).is_ok());

        let err = PageTemplate::new("<html>{{Content}}</html>").unwrap_err();
        assert!(matches!(
            err,
            PageError::MissingPlaceholder {
                placeholder: "{{Title}}"
            }
        ));

        let err = PageTemplate::new("<html>{{Title}}</html>").unwrap_err();
        assert!(matches!(
            err,
            PageError::MissingPlaceholder {
                placeholder: "{{Content}}"
            }
        ));
    }

    #[test]
    fn test_template_fill() {
        let template = PageTemplate::new(TEMPLATE).unwrap();
        let page = template.fill("Hello", "<div><p>body</p></div>");
        assert_eq!(
            page,
            "<html><head><title>Hello</title></head><body><div><p>body</p></div></body></html>"
        );
    }

    #[test]
    fn test_generate_page() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("index.md");
        fs::write(&source, "# Hello\n\nSome **bold** text.").unwrap();

        let template = PageTemplate::new(TEMPLATE).unwrap();
        let dest = dir.path().join("out").join("index.html");
        generate_page(&source, &template, &dest).unwrap();

        let html = fs::read_to_string(&dest).unwrap();
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains("<p>Some <b>bold</b> text.</p>"));
    }

    #[test]
    fn test_generate_pages_mirrors_directories() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("posts")).unwrap();
        fs::write(content.join("index.md"), "# Home\n\nwelcome").unwrap();
        fs::write(content.join("posts/first.md"), "# First\n\npost").unwrap();
        fs::write(content.join("notes.txt"), "not markdown").unwrap();

        let out = dir.path().join("public");
        let template = PageTemplate::new(TEMPLATE).unwrap();
        generate_pages(&content, &template, &out).unwrap();

        assert!(out.join("index.html").is_file());
        assert!(out.join("posts/first.html").is_file());
        assert!(!out.join("notes.html").exists());
    }
}
