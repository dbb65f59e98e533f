//! Notebake Parser
//!
//! One concrete producer of [`StructuralCache`]: scans markdown text for
//! embed references, headings, list items, and `^block` anchors, and parses
//! the YAML frontmatter header. The bake engine never depends on this
//! crate; it consumes whatever cache the host supplies. This scanner is the
//! host used by the CLI and by integration tests.

mod blocks;
mod embeds;
mod error;
mod frontmatter;
mod headings;
mod lines;
mod lists;

pub use error::ParseError;

use notebake_core::StructuralCache;
use tracing::warn;

/// Result of scanning one note's text
#[derive(Debug, Clone, Default)]
pub struct ParsedNote {
    /// Structural metadata for the scanned text
    pub cache: StructuralCache,
    /// Recoverable scan errors; a bad frontmatter yields a cache without
    /// frontmatter, never a failed parse
    pub errors: Vec<ParseError>,
}

/// Scan a note's full text into a structural cache.
///
/// Total: always produces a cache. Offsets in the cache are byte offsets
/// into exactly the text passed here.
pub fn parse_note(content: &str) -> ParsedNote {
    let mut errors = Vec::new();

    let (fm, fm_error) = frontmatter::scan(content);
    if let Some(error) = fm_error {
        warn!(%error, "frontmatter did not parse, continuing without it");
        errors.push(error);
    }

    let lines = lines::scan_lines(content);
    let cache = StructuralCache {
        embeds: embeds::scan(content),
        list_items: lists::scan(&lines),
        headings: headings::scan(&lines),
        blocks: blocks::scan(&lines),
        frontmatter: fm,
    };

    ParsedNote { cache, errors }
}
