//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::{DocumentedUnit, ParsedRecord};
use anyhow::{anyhow, Result};

/// Knobs shared by all renderers.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Info string for fenced example blocks; empty means none
    pub code_lang: String,
    /// Keep units marked `@private` or `@ignore` in Markdown pages
    pub show_private: bool,
}

/// Trait for rendering parsed doc-comments into a specific output format.
pub trait Renderer {
    /// A page for a whole unit listing.
    fn render(&self, units: &[DocumentedUnit]) -> Result<String>;
    /// A single record, without any unit heading.
    fn render_record(&self, record: &ParsedRecord) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, options: RenderOptions) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer::new(options))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}
