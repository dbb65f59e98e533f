//! Heading scanning

use notebake_core::HeadingRef;
use regex::Regex;
use std::sync::LazyLock;

use crate::lines::Line;

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[ \t]+(.*?)[ \t]*$").expect("heading regex"));

/// Scan lines for ATX headings, in document order
pub fn scan(lines: &[Line<'_>]) -> Vec<HeadingRef> {
    lines
        .iter()
        .filter(|line| !line.in_fence)
        .filter_map(|line| {
            let caps = HEADING_REGEX.captures(line.text)?;
            Some(HeadingRef {
                level: caps[1].len() as u8,
                text: caps[2].to_string(),
                line: line.index,
                offset: line.offset,
            })
        })
        .collect()
}
