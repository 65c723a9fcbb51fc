//! Parser module - one parser per product plan document role.
//!
//! Every parser takes the raw Markdown and returns `Some(doc)` or `None`.
//! `None` covers empty input, input without any recognized content, and
//! input that breaks an extraction step; callers cannot tell these apart.

pub mod data_model;
pub mod overview;
pub mod roadmap;
pub mod section;
pub mod shell;

use crate::model::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Document roles that have a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Overview,
    Roadmap,
    DataModel,
    Shell,
    Section,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::Overview,
        DocumentKind::Roadmap,
        DocumentKind::DataModel,
        DocumentKind::Shell,
        DocumentKind::Section,
    ];

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::Overview => "overview",
            DocumentKind::Roadmap => "roadmap",
            DocumentKind::DataModel => "data-model",
            DocumentKind::Shell => "shell",
            DocumentKind::Section => "section",
        }
    }

    /// Logical file name of the role, relative to the product directory.
    /// Section specs live at `sections/<id>/spec.md`.
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Overview => "product-overview.md",
            DocumentKind::Roadmap => "product-roadmap.md",
            DocumentKind::DataModel => "data-model.md",
            DocumentKind::Shell => "shell/spec.md",
            DocumentKind::Section => "spec.md",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                format!(
                    "unknown document kind: {}. Use overview, roadmap, data-model, shell, or section",
                    s
                )
            })
    }
}

/// Output of [`parse_document`], tagged by role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedDocument {
    Overview(OverviewDoc),
    Roadmap(RoadmapDoc),
    DataModel(DataModelDoc),
    Shell(ShellSpecDoc),
    Section(SectionSpecDoc),
}

/// Parse a document with the parser for its role.
pub fn parse_document(kind: DocumentKind, markdown: &str) -> Option<ParsedDocument> {
    let parsed = match kind {
        DocumentKind::Overview => overview::parse(markdown).map(ParsedDocument::Overview),
        DocumentKind::Roadmap => roadmap::parse(markdown).map(ParsedDocument::Roadmap),
        DocumentKind::DataModel => data_model::parse(markdown).map(ParsedDocument::DataModel),
        DocumentKind::Shell => shell::parse(markdown).map(ParsedDocument::Shell),
        DocumentKind::Section => section::parse(markdown).map(ParsedDocument::Section),
    };
    if parsed.is_none() {
        log::debug!("{} document yielded no content", kind);
    }
    parsed
}

/// True when the input has nothing but whitespace.
fn is_blank(markdown: &str) -> bool {
    markdown.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_name() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.name().parse::<DocumentKind>(), Ok(kind));
        }
        assert!("readme".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn heading_free_markdown_is_absent_everywhere() {
        let md = "Just some prose.\n\nWith a second paragraph\n- and a stray bullet\n";
        for kind in DocumentKind::ALL {
            assert_eq!(parse_document(kind, md), None, "{kind} should be absent");
        }
    }

    #[test]
    fn blank_input_is_absent_everywhere() {
        for kind in DocumentKind::ALL {
            assert_eq!(parse_document(kind, ""), None);
            assert_eq!(parse_document(kind, "  \n\t\n"), None);
        }
    }

    #[test]
    fn dispatch_tags_result() {
        let md = "### 1. Inbox\nTriage mail.\n";
        assert!(matches!(
            parse_document(DocumentKind::Roadmap, md),
            Some(ParsedDocument::Roadmap(_))
        ));
    }
}
