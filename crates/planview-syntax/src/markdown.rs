//! Markdown block primitives shared by every document parser.
//!
//! These are line-oriented, not an AST: a heading is a line starting with
//! 1-6 `#` followed by whitespace, and a block runs until the next heading
//! of the same or a shallower level. Slices borrow from the input.

use regex::Regex;
use std::sync::LazyLock;

static RE_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());

/// A heading of a fixed level together with the text under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadedBlock<'a> {
    /// Heading text with the `#` marker and surrounding whitespace removed
    pub heading: &'a str,
    /// Untrimmed body up to the next heading of equal or shallower level
    pub body: &'a str,
}

/// Level of a heading line, or `None` for any other line.
pub fn heading_level(line: &str) -> Option<usize> {
    let line = line.trim_end_matches(['\n', '\r']);
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    match line[hashes..].chars().next() {
        None => Some(hashes),
        Some(c) if c.is_whitespace() => Some(hashes),
        _ => None,
    }
}

/// Text of the first level-1 heading (`# Title`), trimmed.
pub fn document_title(markdown: &str) -> Option<&str> {
    RE_TITLE
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|title| !title.is_empty())
}

/// Return the block under the first `level`-deep heading named `heading`.
///
/// The heading must match verbatim (case-sensitive); trailing whitespace on
/// the heading line is ignored. The block excludes the heading line itself
/// and stops before the next heading of level `<= level`. A missing heading
/// yields `""`, same as a heading with nothing under it.
pub fn extract_block<'a>(markdown: &'a str, heading: &str, level: usize) -> &'a str {
    let marker = "#".repeat(level);
    let mut start: Option<usize> = None;
    let mut offset = 0;

    for line in markdown.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match start {
            None => {
                let named = line
                    .trim_end()
                    .strip_prefix(marker.as_str())
                    .and_then(|rest| rest.strip_prefix(' '))
                    .is_some_and(|text| text == heading);
                if named {
                    start = Some(offset);
                }
            }
            Some(begin) => {
                if heading_level(line).is_some_and(|l| l <= level) {
                    return &markdown[begin..line_start];
                }
            }
        }
    }

    start.map_or("", |begin| &markdown[begin..])
}

/// Split `text` at every heading of exactly `level`, in source order.
///
/// Text before the first such heading is dropped. Deeper headings stay
/// inside the body; shallower headings end the current block without
/// opening a new one.
pub fn headed_blocks(text: &str, level: usize) -> Vec<HeadedBlock<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<(&str, usize)> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let Some(found) = heading_level(line).filter(|&l| l <= level) else {
            continue;
        };

        if let Some((heading, begin)) = current.take() {
            blocks.push(HeadedBlock {
                heading,
                body: &text[begin..line_start],
            });
        }
        if found == level {
            current = Some((line[level..].trim(), offset));
        }
    }

    if let Some((heading, begin)) = current {
        blocks.push(HeadedBlock {
            heading,
            body: &text[begin..],
        });
    }
    blocks
}

/// Collect `- ` bullet items from a block, markers stripped.
///
/// Lines that are not bullets are skipped, so an item never spans more
/// than one line.
pub fn extract_bullets(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|line| line.trim().strip_prefix("- "))
        .map(|item| item.trim().to_string())
        .collect()
}
