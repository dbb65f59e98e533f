//! Structural metadata for a note snapshot
//!
//! The cache describes one immutable text buffer: where its embeds sit, how
//! its list items nest, which headings and block anchors it declares, and
//! its frontmatter. All offsets are byte offsets into that buffer; a cache
//! is only valid against the exact text it was produced from.

use serde::{Deserialize, Serialize};

use super::frontmatter::Frontmatter;

/// Half-open byte-offset range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    /// Create a span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span is empty
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// An embed reference: `![[link]]` with its position in the source.
///
/// `link` is the raw linktext and may carry a `#subpath` fragment; alias
/// text after `|` is not part of it. Spans are non-overlapping; the baker
/// sorts them by start offset before processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedRef {
    /// Raw linktext, e.g. `Other Note#Heading`
    pub link: String,
    /// Span of the whole `![[...]]` marker
    pub span: Span,
}

/// A list item entry, used only for block-subpath extraction.
///
/// `span` starts at the item's content (after the bullet marker and its
/// trailing spaces) and ends at the end of the item's line. `parent` is the
/// line number of the enclosing item, or a negative value for top-level
/// items; negatives can never appear in a set of line numbers, which is what
/// terminates the descendant walk at the list's outer border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItemRef {
    /// Zero-based line number of the item
    pub line: usize,
    /// Line number of the parent item, negative for top-level items
    pub parent: i64,
    /// Leading whitespace width of the item's line, in bytes
    pub indent: usize,
    /// Content span: after the marker up to the end of the line
    pub span: Span,
}

/// A heading with its section start offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRef {
    /// Heading level, 1-6
    pub level: u8,
    /// Heading text without the `#` markers, trimmed
    pub text: String,
    /// Zero-based line number
    pub line: usize,
    /// Byte offset of the heading line start
    pub offset: usize,
}

/// A `^block-id` anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRef {
    /// Anchor id without the `^`
    pub id: String,
    /// Zero-based line number the anchor sits on
    pub line: usize,
    /// Span of the anchored line
    pub span: Span,
}

/// Parsed structural metadata for one note snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuralCache {
    /// Embed references in source order
    pub embeds: Vec<EmbedRef>,
    /// List items in document order
    pub list_items: Vec<ListItemRef>,
    /// Headings in document order
    pub headings: Vec<HeadingRef>,
    /// Block anchors in document order
    pub blocks: Vec<BlockRef>,
    /// Frontmatter mapping, when the note has one
    pub frontmatter: Option<Frontmatter>,
}

/// Resolved target of a `#heading` or `#^block` fragment
#[derive(Debug, Clone, PartialEq)]
pub enum SubpathLocator {
    /// A heading section: from the heading line to the next heading of the
    /// same or shallower level (`None` = end of document)
    Heading {
        /// Section start offset
        start: usize,
        /// Section end offset, `None` when the section runs to the end
        end: Option<usize>,
    },
    /// A block anchor sitting on a list item; extraction includes the
    /// item's descendant subtree
    Block {
        /// The anchored list item
        item: ListItemRef,
    },
    /// A block anchor outside any list
    BlockSpan {
        /// Span of the anchored block
        span: Span,
    },
}

impl StructuralCache {
    /// Resolve a subpath string (`#Heading`, `#^block-id`, with or without
    /// the leading `#`) against this cache.
    ///
    /// Heading text matches case-insensitively on the trimmed text; block
    /// ids match case-insensitively. Returns `None` when nothing matches;
    /// the caller then falls back to the full document text.
    pub fn resolve_subpath(&self, subpath: &str) -> Option<SubpathLocator> {
        let sub = subpath.strip_prefix('#').unwrap_or(subpath);

        if let Some(id) = sub.strip_prefix('^') {
            let block = self.blocks.iter().find(|b| b.id.eq_ignore_ascii_case(id))?;
            if let Some(item) = self.list_items.iter().find(|i| i.line == block.line) {
                return Some(SubpathLocator::Block { item: item.clone() });
            }
            return Some(SubpathLocator::BlockSpan { span: block.span });
        }

        let wanted = sub.trim();
        let (idx, heading) = self
            .headings
            .iter()
            .enumerate()
            .find(|(_, h)| h.text.eq_ignore_ascii_case(wanted))?;
        let end = self.headings[idx + 1..]
            .iter()
            .find(|h| h.level <= heading.level)
            .map(|h| h.offset);
        Some(SubpathLocator::Heading {
            start: heading.offset,
            end,
        })
    }
}
