//! Aggregate payloads: the whole product, and one section.

use crate::correlate::{tally, SectionInventory};
use crate::design;
use crate::model::*;
use crate::parser::{data_model, overview, roadmap, shell};
use serde::Serialize;
use serde_json::Value;

/// Everything the caller found under the product directory.
#[derive(Debug, Clone, Default)]
pub struct ProductInputs {
    pub overview: Option<String>,
    pub roadmap: Option<String>,
    pub data_model: Option<String>,
    pub shell_spec: Option<String>,
    pub colors: Option<Value>,
    pub typography: Option<Value>,
    /// `AppShell.vue` exists among the shell components
    pub has_shell_components: bool,
    pub inventory: SectionInventory,
    pub export_zip_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReport {
    pub data: ProductData,
    pub has_product_overview: bool,
    pub has_product_roadmap: bool,
    pub has_data_model: bool,
    pub has_design_system: bool,
    pub has_shell: bool,
    pub export_zip_url: Option<String>,
    pub section_stats: SectionStats,
}

impl ProductReport {
    /// Parse every product-level document and tally section progress.
    pub fn build(inputs: ProductInputs) -> Self {
        let overview = inputs.overview.as_deref().and_then(overview::parse);
        let roadmap = inputs.roadmap.as_deref().and_then(roadmap::parse);
        let data_model = inputs.data_model.as_deref().and_then(data_model::parse);
        let design_system = design::project(inputs.colors.as_ref(), inputs.typography.as_ref());

        let shell_spec = inputs.shell_spec.as_deref().and_then(shell::parse);
        let shell = if shell_spec.is_some() || inputs.has_shell_components {
            Some(ShellInfo {
                spec: shell_spec,
                has_components: inputs.has_shell_components,
            })
        } else {
            None
        };

        let tally = tally(roadmap.as_ref(), &inputs.inventory);

        ProductReport {
            has_product_overview: overview.is_some(),
            has_product_roadmap: roadmap.is_some(),
            has_data_model: data_model.is_some(),
            has_design_system: design_system.is_some(),
            has_shell: shell.is_some(),
            export_zip_url: inputs.export_zip_url,
            section_stats: tally.stats,
            data: ProductData {
                overview,
                roadmap,
                data_model,
                design_system,
                shell,
                section_progress: tally.progress,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub section_data: SectionRecord,
    pub has_spec: bool,
    pub has_data: bool,
    pub has_screen_designs: bool,
    pub has_screenshots: bool,
}

impl SectionReport {
    pub fn new(record: SectionRecord) -> Self {
        SectionReport {
            has_spec: record.spec.is_some(),
            has_data: record.data.is_some(),
            has_screen_designs: !record.screen_designs.is_empty(),
            has_screenshots: !record.screenshots.is_empty(),
            section_data: record,
        }
    }
}
