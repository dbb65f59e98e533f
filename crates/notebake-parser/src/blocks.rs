//! Block anchor scanning
//!
//! A block anchor is a trailing ` ^id` token at the end of a content line.
//! The recorded span covers the whole line including the anchor; extraction
//! strips the anchor text afterwards.

use notebake_core::{BlockRef, Span};
use regex::Regex;
use std::sync::LazyLock;

use crate::lines::Line;

static ANCHOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]\^([A-Za-z0-9_-]+)[ \t]*$").expect("block anchor regex"));

/// Scan lines for block anchors, in document order
pub fn scan(lines: &[Line<'_>]) -> Vec<BlockRef> {
    lines
        .iter()
        .filter(|line| !line.in_fence)
        .filter_map(|line| {
            let caps = ANCHOR_REGEX.captures(line.text)?;
            Some(BlockRef {
                id: caps[1].to_string(),
                line: line.index,
                span: Span::new(line.offset, line.end()),
            })
        })
        .collect()
}
