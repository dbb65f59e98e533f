//! Heading/block subsection extraction

use std::collections::HashSet;

use super::sanitize::{dedent, strip_block_ids};
use crate::types::{StructuralCache, SubpathLocator};

/// Extract the substring of `content` belonging to a resolved subpath.
///
/// For a block locator on a list item the extraction covers the item's own
/// line plus its descendant subtree: the cache's list items are scanned in
/// document order starting at the target, and every subsequent item whose
/// parent line is already included stays in; the walk stops at the first
/// item whose parent is not. Heading locators are a plain range, open-ended
/// sections running to the end of the content.
///
/// Trailing block-reference ids are stripped from every extracted line.
pub fn extract_subpath(content: &str, locator: &SubpathLocator, cache: &StructuralCache) -> String {
    match locator {
        SubpathLocator::Block { item } => {
            let mut included: HashSet<usize> = HashSet::new();
            included.insert(item.line);
            let start = item.span.start.saturating_sub(item.indent);
            let mut end = item.span.end;
            let mut found = false;

            for candidate in &cache.list_items {
                if candidate.line == item.line {
                    found = true;
                    continue;
                }
                if !found {
                    // Keep seeking until we pass the target
                    continue;
                }
                if candidate.parent < 0 || !included.contains(&(candidate.parent as usize)) {
                    break;
                }
                included.insert(candidate.line);
                end = candidate.span.end;
            }

            strip_block_ids(&dedent(&content[start..end.min(content.len())]))
        }
        SubpathLocator::BlockSpan { span } => {
            strip_block_ids(&content[span.start..span.end.min(content.len())])
        }
        SubpathLocator::Heading { start, end } => {
            let end = end.unwrap_or(content.len()).min(content.len());
            strip_block_ids(&content[*start..end])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlockRef, HeadingRef, ListItemRef, Span};

    /// Build list items for a simple bullet list, one item per line, with
    /// the content span starting after the `- ` marker.
    fn list_cache(content: &str) -> StructuralCache {
        let mut cache = StructuralCache::default();
        let mut offset = 0;
        let mut stack: Vec<(usize, usize)> = Vec::new(); // (indent, line)
        for (line, text) in content.lines().enumerate() {
            let indent = text.len() - text.trim_start().len();
            let rest = &text[indent..];
            if let Some(stripped) = rest.strip_prefix("- ") {
                while let Some(&(top_indent, _)) = stack.last() {
                    if top_indent < indent {
                        break;
                    }
                    stack.pop();
                }
                let parent = stack.last().map(|&(_, l)| l as i64).unwrap_or(-1);
                let content_start = offset + indent + 2;
                cache.list_items.push(ListItemRef {
                    line,
                    parent,
                    indent,
                    span: Span::new(content_start, content_start + stripped.len()),
                });
                stack.push((indent, line));
            } else {
                stack.clear();
            }
            offset += text.len() + 1;
        }
        cache
    }

    #[test]
    fn test_block_extraction_includes_descendants_only() {
        let content = "- A\n  - B\n  - C\n- D";
        let cache = list_cache(content);
        let item = cache.list_items[0].clone();
        let locator = SubpathLocator::Block { item };
        assert_eq!(extract_subpath(content, &locator, &cache), "A\n  - B\n  - C");
    }

    #[test]
    fn test_block_extraction_strips_block_ids() {
        let content = "- A ^abc123\n  - B ^x\n- D";
        let cache = list_cache(content);
        let item = cache.list_items[0].clone();
        let locator = SubpathLocator::Block { item };
        assert_eq!(extract_subpath(content, &locator, &cache), "A\n  - B");
    }

    #[test]
    fn test_block_extraction_nested_target_excludes_siblings() {
        let content = "- A\n  - B\n    - C\n  - E\n- D";
        let cache = list_cache(content);
        // Target B: C is a descendant, E is B's sibling, walk stops at E
        let item = cache.list_items[1].clone();
        let locator = SubpathLocator::Block { item };
        assert_eq!(extract_subpath(content, &locator, &cache), "- B\n    - C");
    }

    #[test]
    fn test_block_extraction_deep_subtree() {
        let content = "- A\n  - B\n    - C\n  - E\n- D";
        let cache = list_cache(content);
        let item = cache.list_items[0].clone();
        let locator = SubpathLocator::Block { item };
        // B, C, and E are all in A's subtree; D is not
        assert_eq!(
            extract_subpath(content, &locator, &cache),
            "A\n  - B\n    - C\n  - E"
        );
    }

    #[test]
    fn test_heading_extraction_range() {
        let content = "# One\nalpha\n# Two\nbeta\n";
        let cache = StructuralCache {
            headings: vec![
                HeadingRef {
                    level: 1,
                    text: "One".into(),
                    line: 0,
                    offset: 0,
                },
                HeadingRef {
                    level: 1,
                    text: "Two".into(),
                    line: 2,
                    offset: 12,
                },
            ],
            ..Default::default()
        };
        let locator = cache.resolve_subpath("#One").unwrap();
        assert_eq!(extract_subpath(content, &locator, &cache), "# One\nalpha\n");
    }

    #[test]
    fn test_heading_extraction_open_ended() {
        let content = "# One\nalpha ^id9\n";
        let locator = SubpathLocator::Heading {
            start: 0,
            end: None,
        };
        let cache = StructuralCache::default();
        assert_eq!(extract_subpath(content, &locator, &cache), "# One\nalpha\n");
    }

    #[test]
    fn test_block_span_extraction() {
        let content = "para one\n\nanchored para ^blk\n";
        let cache = StructuralCache {
            blocks: vec![BlockRef {
                id: "blk".into(),
                line: 2,
                span: Span::new(10, 28),
            }],
            ..Default::default()
        };
        let locator = cache.resolve_subpath("#^blk").unwrap();
        assert_eq!(extract_subpath(content, &locator, &cache), "anchored para");
    }
}
