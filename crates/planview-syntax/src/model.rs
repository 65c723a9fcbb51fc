//! Data model for parsed product plan documents - format-agnostic.
//!
//! Field names serialize in camelCase so the JSON matches what the
//! rendering layer already consumes.

use serde::Serialize;
use std::collections::BTreeMap;

/// `### Problem <n>: <title>` entry from the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemEntry {
    pub title: String,
    pub solution: String,
}

/// Parsed `product-overview.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewDoc {
    pub name: String,
    pub description: String,
    pub problems: Vec<ProblemEntry>,
    pub features: Vec<String>,
}

/// A numbered `### <n>. <title>` entry from the roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapSection {
    /// Slug of `title`; the join key for every per-section asset.
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: u64,
}

/// Parsed `product-roadmap.md`, sections sorted by `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapDoc {
    pub sections: Vec<RoadmapSection>,
}

impl RoadmapDoc {
    /// Section ids in roadmap order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }
}

/// One `### Name` entity of the data model with its prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    pub name: String,
    pub description: String,
}

/// Parsed `data-model.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataModelDoc {
    pub entities: Vec<EntityDescriptor>,
    pub relationships: Vec<String>,
}

/// Parsed `shell/spec.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellSpecDoc {
    pub overview: String,
    pub navigation_items: Vec<String>,
    pub layout_pattern: String,
    /// Verbatim source text
    pub raw: String,
}

/// Parsed `sections/<id>/spec.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpecDoc {
    pub title: String,
    pub overview: String,
    pub user_flows: Vec<String>,
    pub ui_requirements: Vec<String>,
    /// False only when the document carries a `shell: false` directive.
    pub use_shell: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorTokens {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypographyTokens {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub mono: String,
}

/// Projection of `design-system/colors.json` and `design-system/typography.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignSystemDoc {
    pub colors: Option<ColorTokens>,
    pub typography: Option<TypographyTokens>,
}

/// A `.vue` screen design found for a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenDesignRef {
    pub name: String,
    pub path: String,
    pub component_name: String,
}

/// A screenshot image found for a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenshotRef {
    pub name: String,
    pub path: String,
    pub url: String,
}

/// Everything known about one section, joined by its slug.
///
/// A record with every field empty is valid: the section is declared in the
/// roadmap but nothing has been built for it yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    pub section_id: String,
    pub spec: Option<String>,
    pub spec_parsed: Option<SectionSpecDoc>,
    pub data: Option<serde_json::Value>,
    pub screen_designs: Vec<ScreenDesignRef>,
    pub screenshots: Vec<ScreenshotRef>,
}

/// Roadmap section totals shown in the product report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStats {
    pub total: usize,
    pub with_screen_designs: usize,
}

/// Build progress of one roadmap section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProgress {
    pub has_spec: bool,
    pub has_data: bool,
    pub has_screen_designs: bool,
    pub screen_design_count: usize,
    pub has_screenshots: bool,
    pub screenshot_count: usize,
}

/// The application shell spec and whether shell components exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellInfo {
    pub spec: Option<ShellSpecDoc>,
    pub has_components: bool,
}

/// All product-level documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub overview: Option<OverviewDoc>,
    pub roadmap: Option<RoadmapDoc>,
    pub data_model: Option<DataModelDoc>,
    pub design_system: Option<DesignSystemDoc>,
    pub shell: Option<ShellInfo>,
    pub section_progress: BTreeMap<String, SectionProgress>,
}
