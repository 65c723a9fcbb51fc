//! Section correlation - join independently discovered assets by slug.
//!
//! Specs, sample data, screen designs and screenshots are each found on
//! their own; the roadmap's section ids are the only thing tying them
//! together. [`correlate`] builds the full record for one section and
//! [`tally`] folds the whole roadmap into progress flags and statistics.

use crate::model::*;
use crate::parser::section;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};

const SCREEN_DESIGN_EXTENSIONS: &[&str] = &[".vue"];
const SCREENSHOT_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Raw material for one section, as found by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionInputs {
    /// Contents of `sections/<id>/spec.md`
    pub spec: Option<String>,
    /// Decoded `sections/<id>/data.json`
    pub data: Option<Value>,
    /// File names in the section's component directory, in listing order
    pub screen_design_files: Vec<String>,
    /// File names in the section's product directory, in listing order
    pub screenshot_files: Vec<String>,
}

/// Build the record for `section_id`. Files that are not screen designs or
/// screenshots are ignored; the supplied order is kept.
pub fn correlate(section_id: &str, inputs: SectionInputs) -> SectionRecord {
    let spec_parsed = inputs.spec.as_deref().and_then(section::parse);

    let screen_designs = inputs
        .screen_design_files
        .iter()
        .filter_map(|file| {
            let name = strip_extension(file, SCREEN_DESIGN_EXTENSIONS)?;
            Some(ScreenDesignRef {
                name: name.to_string(),
                path: format!("/components/sections/{}/{}", section_id, file),
                component_name: name.to_string(),
            })
        })
        .collect();

    let screenshots = inputs
        .screenshot_files
        .iter()
        .filter_map(|file| {
            let name = strip_extension(file, SCREENSHOT_EXTENSIONS)?;
            Some(ScreenshotRef {
                name: name.to_string(),
                path: format!("/product/sections/{}/{}", section_id, file),
                url: format!("/api/product/image/{}/{}", section_id, file),
            })
        })
        .collect();

    SectionRecord {
        section_id: section_id.to_string(),
        spec: inputs.spec,
        spec_parsed,
        data: inputs.data,
        screen_designs,
        screenshots,
    }
}

pub fn is_screen_design_file(file: &str) -> bool {
    strip_extension(file, SCREEN_DESIGN_EXTENSIONS).is_some()
}

pub fn is_screenshot_file(file: &str) -> bool {
    strip_extension(file, SCREENSHOT_EXTENSIONS).is_some()
}

fn strip_extension<'a>(file: &'a str, extensions: &[&str]) -> Option<&'a str> {
    extensions.iter().find_map(|ext| file.strip_suffix(ext))
}

/// Which assets exist, keyed by section slug.
///
/// Filled from directory listings; entries for ids the roadmap never
/// mentions are harmless and simply never looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionInventory {
    specs: HashSet<String>,
    data: HashSet<String>,
    screen_designs: HashMap<String, usize>,
    screenshots: HashMap<String, usize>,
}

impl SectionInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_spec(&mut self, section_id: &str) {
        self.specs.insert(section_id.to_string());
    }

    pub fn add_data(&mut self, section_id: &str) {
        self.data.insert(section_id.to_string());
    }

    /// Count `file` if it is a screen design.
    pub fn add_screen_design(&mut self, section_id: &str, file: &str) {
        if is_screen_design_file(file) {
            *self.screen_designs.entry(section_id.to_string()).or_default() += 1;
        }
    }

    /// Count `file` if it is a screenshot.
    pub fn add_screenshot(&mut self, section_id: &str, file: &str) {
        if is_screenshot_file(file) {
            *self.screenshots.entry(section_id.to_string()).or_default() += 1;
        }
    }

    /// Progress flags for one section; an unknown id is all-false.
    pub fn progress(&self, section_id: &str) -> SectionProgress {
        let screen_design_count = self.screen_designs.get(section_id).copied().unwrap_or(0);
        let screenshot_count = self.screenshots.get(section_id).copied().unwrap_or(0);
        SectionProgress {
            has_spec: self.specs.contains(section_id),
            has_data: self.data.contains(section_id),
            has_screen_designs: screen_design_count > 0,
            screen_design_count,
            has_screenshots: screenshot_count > 0,
            screenshot_count,
        }
    }
}

/// Roadmap-wide progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTally {
    pub stats: SectionStats,
    pub progress: BTreeMap<String, SectionProgress>,
}

/// Outer-join the roadmap's sections against the inventory.
///
/// Every roadmap section counts toward `total`, built or not. Sections
/// whose titles share a slug are counted once each but share one progress
/// entry.
pub fn tally(roadmap: Option<&RoadmapDoc>, inventory: &SectionInventory) -> SectionTally {
    let Some(roadmap) = roadmap else {
        return SectionTally::default();
    };

    let mut result = SectionTally::default();
    result.stats.total = roadmap.sections.len();

    for id in roadmap.ids() {
        let progress = inventory.progress(id);
        if progress.has_screen_designs {
            result.stats.with_screen_designs += 1;
        }
        result.progress.insert(id.to_string(), progress);
    }

    result
}
