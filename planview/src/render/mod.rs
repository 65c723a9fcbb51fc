//! Renderer module - trait-based format dispatch.

pub mod json;
pub mod markdown;

use anyhow::{anyhow, Result};
use planview_syntax::parser::ParsedDocument;
use planview_syntax::product::{ProductReport, SectionReport};

/// Trait for rendering planview payloads into a specific output format.
pub trait Renderer {
    fn render_product(&self, report: &ProductReport) -> Result<String>;
    fn render_section(&self, report: &SectionReport) -> Result<String>;
    /// `None` is a document that parsed to nothing.
    fn render_document(&self, doc: Option<&ParsedDocument>) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use json or markdown", format)),
    }
}
