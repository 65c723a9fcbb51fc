//! `product-roadmap.md` parser.
//!
//! Sections are `### <n>. <title>` headings anywhere in the document. The
//! number becomes `order`; it need not be contiguous or unique.

use super::is_blank;
use crate::markdown::headed_blocks;
use crate::model::{RoadmapDoc, RoadmapSection};
use crate::slug::slugify;
use regex::Regex;
use std::sync::LazyLock;

static RE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.+)$").unwrap());

/// Parse the roadmap. Sections are stable-sorted by `order`, so duplicate
/// numbers keep their source order.
pub fn parse(markdown: &str) -> Option<RoadmapDoc> {
    if is_blank(markdown) {
        return None;
    }

    let mut sections = Vec::new();
    for block in headed_blocks(markdown, 3) {
        let Some(caps) = RE_SECTION.captures(block.heading) else {
            continue;
        };
        // Digits beyond u64 sort last.
        let order = caps[1].parse::<u64>().unwrap_or_else(|_| {
            log::debug!("roadmap order out of range: {}", &caps[1]);
            u64::MAX
        });
        let title = caps[2].trim().to_string();
        sections.push(RoadmapSection {
            id: slugify(&title),
            title,
            description: block.body.trim().to_string(),
            order,
        });
    }

    if sections.is_empty() {
        return None;
    }
    sections.sort_by_key(|s| s.order);

    Some(RoadmapDoc { sections })
}
