use std::fs;
use std::path::Path;

use liquid::model::{Object, Value};
use tracing::debug;

use crate::error::RenderError;
use crate::markdown::process_markdown_regions;
use crate::registry::shared_parser;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Run the markdown pass over `markdown="1"` notice regions.
    pub markdown: bool,
}

/// Build a Liquid globals object of string values.
pub fn globals_from_pairs<I, K, V>(pairs: I) -> Object
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut globals = Object::new();
    for (key, value) in pairs {
        let key: String = key.into();
        let value: String = value.into();
        globals.insert(key.into(), Value::scalar(value));
    }
    globals
}

/// Render Liquid source with the notice blocks available.
pub fn render_source(
    source: &str,
    globals: &Object,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let parser = shared_parser()?;
    let template = parser.parse(source).map_err(RenderError::Parse)?;
    let rendered = template.render(globals).map_err(RenderError::Render)?;

    if options.markdown {
        return Ok(process_markdown_regions(&rendered));
    }
    Ok(rendered)
}

pub fn render_file(
    path: &Path,
    globals: &Object,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    debug!(path = %path.display(), "reading template");
    let source = fs::read_to_string(path)
        .map_err(|source| RenderError::Io { path: path.to_path_buf(), source })?;
    render_source(&source, globals, options)
}
