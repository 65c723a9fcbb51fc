//! `product-overview.md` parser.

use super::is_blank;
use crate::markdown::{document_title, extract_block, extract_bullets, headed_blocks};
use crate::model::{OverviewDoc, ProblemEntry};
use regex::Regex;
use std::sync::LazyLock;

/// Name used when the overview has no `# ` heading.
pub const DEFAULT_NAME: &str = "Product Overview";

static RE_PROBLEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Problem \d+:\s*(.+)$").unwrap());

/// Parse the product overview.
///
/// Absent when description, problems and features are all empty, even if
/// the document has a title.
pub fn parse(markdown: &str) -> Option<OverviewDoc> {
    if is_blank(markdown) {
        return None;
    }

    let name = document_title(markdown).unwrap_or(DEFAULT_NAME).to_string();
    let description = extract_block(markdown, "Description", 2).trim().to_string();
    let problems = parse_problems(extract_block(markdown, "Problems & Solutions", 2));
    let features = extract_bullets(extract_block(markdown, "Key Features", 2));

    if description.is_empty() && problems.is_empty() && features.is_empty() {
        return None;
    }

    Some(OverviewDoc {
        name,
        description,
        problems,
        features,
    })
}

/// `### Problem <n>: <title>` headings, each followed by its solution text.
fn parse_problems(block: &str) -> Vec<ProblemEntry> {
    headed_blocks(block, 3)
        .into_iter()
        .filter_map(|b| {
            let caps = RE_PROBLEM.captures(b.heading)?;
            let title = caps[1].trim();
            let solution = b.body.trim();
            if title.is_empty() || solution.is_empty() {
                return None;
            }
            Some(ProblemEntry {
                title: title.to_string(),
                solution: solution.to_string(),
            })
        })
        .collect()
}
