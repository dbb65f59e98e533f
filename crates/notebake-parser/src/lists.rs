//! List item scanning
//!
//! Produces `ListItemRef` entries whose parent field carries the line
//! number of the enclosing item, or -1 for top-level items. Content spans
//! start after the bullet marker, which is what the block-subpath extractor
//! expects.

use notebake_core::{ListItemRef, Span};
use regex::Regex;
use std::sync::LazyLock;

use crate::lines::Line;

static ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)((?:[-*+]|[0-9]+[.)])[ \t]+)").expect("list item regex"));

/// Scan lines for list items, in document order
pub fn scan(lines: &[Line<'_>]) -> Vec<ListItemRef> {
    let mut items = Vec::new();
    // (indent, line) chain of currently open items
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for line in lines {
        if line.in_fence {
            continue;
        }
        let Some(caps) = ITEM_REGEX.captures(line.text) else {
            if line.text.trim().is_empty() || line.text.starts_with([' ', '\t']) {
                // Blank or continuation lines keep the current list open
                continue;
            }
            stack.clear();
            continue;
        };

        let indent = caps[1].len();
        let marker_end = caps.get(0).expect("item match").end();

        while let Some(&(top_indent, _)) = stack.last() {
            if top_indent < indent {
                break;
            }
            stack.pop();
        }
        let parent = stack.last().map(|&(_, l)| l as i64).unwrap_or(-1);

        items.push(ListItemRef {
            line: line.index,
            parent,
            indent,
            span: Span::new(line.offset + marker_end, line.end()),
        });
        stack.push((indent, line.index));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::scan_lines;

    fn parents(content: &str) -> Vec<i64> {
        scan(&scan_lines(content)).iter().map(|i| i.parent).collect()
    }

    #[test]
    fn test_flat_list() {
        assert_eq!(parents("- a\n- b\n- c\n"), vec![-1, -1, -1]);
    }

    #[test]
    fn test_nested_parents_are_line_numbers() {
        let content = "- a\n  - b\n    - c\n  - d\n- e\n";
        assert_eq!(parents(content), vec![-1, 0, 1, 0, -1]);
    }

    #[test]
    fn test_ordered_markers() {
        let content = "1. a\n2) b\n";
        let items = scan(&scan_lines(content));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].parent, -1);
    }

    #[test]
    fn test_content_span_starts_after_marker() {
        let content = "- alpha\n  - beta\n";
        let items = scan(&scan_lines(content));
        assert_eq!(&content[items[0].span.start..items[0].span.end], "alpha");
        assert_eq!(&content[items[1].span.start..items[1].span.end], "beta");
        assert_eq!(items[1].indent, 2);
    }

    #[test]
    fn test_paragraph_break_resets_nesting() {
        let content = "- a\n  - b\n\nparagraph\n- c\n  - d\n";
        assert_eq!(parents(content), vec![-1, 0, -1, 4]);
    }

    #[test]
    fn test_blank_line_keeps_list_open() {
        let content = "- a\n\n  - b\n";
        assert_eq!(parents(content), vec![-1, 0]);
    }

    #[test]
    fn test_items_in_fence_are_skipped() {
        let content = "```\n- not an item\n```\n- real\n";
        let items = scan(&scan_lines(content));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].line, 3);
    }
}
