//! `shell/spec.md` parser - the application shell around every section.

use super::is_blank;
use crate::markdown::{extract_block, extract_bullets};
use crate::model::ShellSpecDoc;

pub fn parse(markdown: &str) -> Option<ShellSpecDoc> {
    if is_blank(markdown) {
        return None;
    }

    let overview = extract_block(markdown, "Overview", 2).trim().to_string();
    let navigation_items = extract_bullets(extract_block(markdown, "Navigation Structure", 2));
    let layout_pattern = extract_block(markdown, "Layout Pattern", 2).trim().to_string();

    if overview.is_empty() && navigation_items.is_empty() && layout_pattern.is_empty() {
        return None;
    }

    Some(ShellSpecDoc {
        overview,
        navigation_items,
        layout_pattern,
        raw: markdown.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = r#"# Application Shell

## Overview
A sidebar layout with a top bar.

## Navigation Structure
- Dashboard → Overview
- Invoices
- Settings

## Layout Pattern
Collapsible left sidebar, content on the right.
"#;

    #[test]
    fn parse_shell_spec() {
        let doc = parse(SHELL).unwrap();
        assert_eq!(doc.overview, "A sidebar layout with a top bar.");
        assert_eq!(
            doc.navigation_items,
            vec!["Dashboard → Overview", "Invoices", "Settings"]
        );
        assert_eq!(
            doc.layout_pattern,
            "Collapsible left sidebar, content on the right."
        );
        assert_eq!(doc.raw, SHELL);
    }

    #[test]
    fn navigation_alone_is_enough() {
        let doc = parse("## Navigation Structure\n- Home\n").unwrap();
        assert_eq!(doc.overview, "");
        assert_eq!(doc.navigation_items, vec!["Home"]);
    }

    #[test]
    fn title_only_is_absent() {
        assert_eq!(parse("# Application Shell\n\nTBD\n"), None);
    }
}
