use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while turning template source into HTML.
///
/// Liquid errors are carried untouched; the notice blocks never raise
/// errors of their own.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build template parser: {0}")]
    Parser(#[source] liquid::Error),

    #[error("failed to parse template: {0}")]
    Parse(#[source] liquid::Error),

    #[error("failed to render template: {0}")]
    Render(#[source] liquid::Error),

    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
