//! Error type for page generation.

use mdsite::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No level-1 heading found to use as the page title.
    #[error("title not found: expected a '# Title' heading")]
    TitleNotFound,

    /// The template is missing one of its required placeholders.
    #[error("template missing {placeholder} placeholder")]
    MissingPlaceholder { placeholder: &'static str },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
