//! JSON renderer - the payloads the rendering layer consumes, pretty-printed.

use crate::render::Renderer;
use anyhow::Result;
use planview_syntax::parser::ParsedDocument;
use planview_syntax::product::{ProductReport, SectionReport};
use serde::Serialize;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_product(&self, report: &ProductReport) -> Result<String> {
        to_json(report)
    }

    fn render_section(&self, report: &SectionReport) -> Result<String> {
        to_json(report)
    }

    fn render_document(&self, doc: Option<&ParsedDocument>) -> Result<String> {
        to_json(&doc)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planview_syntax::parser::{parse_document, DocumentKind};

    #[test]
    fn absent_document_is_null() {
        assert_eq!(JsonRenderer.render_document(None).unwrap(), "null\n");
    }

    #[test]
    fn document_fields_are_camel_case() {
        let doc = parse_document(DocumentKind::Shell, "## Navigation Structure\n- Home\n");
        let out = JsonRenderer.render_document(doc.as_ref()).unwrap();
        assert!(out.contains("\"navigationItems\""), "got: {out}");
        assert!(out.contains("\"layoutPattern\": \"\""), "got: {out}");
    }
}
