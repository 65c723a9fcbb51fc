//! Section identifier generation.
//!
//! Roadmap titles become slugs, and slugs are the directory names under
//! which specs, sample data, screen designs and screenshots live.

use regex::Regex;
use std::sync::LazyLock;

static RE_AMPERSAND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+&\s+").unwrap());

static RE_NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Normalize a title into a section identifier.
///
/// - lowercase
/// - ` & ` becomes `-and-` before anything else is touched
/// - every run of characters outside `[a-z0-9]` collapses to one `-`
/// - leading and trailing `-` are stripped
///
/// Distinct titles may collapse to the same slug; no attempt is made to
/// tell them apart.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let joined = RE_AMPERSAND.replace_all(&lower, "-and-");
    let dashed = RE_NON_ALNUM.replace_all(&joined, "-");
    dashed.trim_matches('-').to_string()
}
