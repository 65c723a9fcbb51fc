//! `sections/<id>/spec.md` parser.

use super::is_blank;
use crate::markdown::{document_title, extract_block, extract_bullets};
use crate::model::SectionSpecDoc;
use regex::Regex;
use std::sync::LazyLock;

/// Title used when the spec has no `# ` heading.
pub const DEFAULT_TITLE: &str = "Section Specification";

// `shell: false` / `- Shell : FALSE` on its own line, anywhere in the document
static RE_SHELL_DISABLED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*-?\s*shell\s*:\s*false").unwrap());

/// Parse a section spec.
///
/// Absent only when there is no `# ` title, no content and no
/// `shell: false` directive; a titled stub still carries its directive.
pub fn parse(markdown: &str) -> Option<SectionSpecDoc> {
    if is_blank(markdown) {
        return None;
    }

    let title = document_title(markdown);
    let overview = extract_block(markdown, "Overview", 2).trim().to_string();
    let user_flows = extract_bullets(extract_block(markdown, "User Flows", 2));
    let ui_requirements = extract_bullets(extract_block(markdown, "UI Requirements", 2));
    let use_shell = uses_shell(markdown);

    if title.is_none()
        && overview.is_empty()
        && user_flows.is_empty()
        && ui_requirements.is_empty()
        && use_shell
    {
        return None;
    }

    Some(SectionSpecDoc {
        title: title.unwrap_or(DEFAULT_TITLE).to_string(),
        overview,
        user_flows,
        ui_requirements,
        use_shell,
    })
}

/// Whether the section renders inside the application shell.
pub fn uses_shell(markdown: &str) -> bool {
    !RE_SHELL_DISABLED.is_match(markdown)
}
