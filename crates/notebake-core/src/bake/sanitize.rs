//! Fragment sanitation and indentation helpers
//!
//! Resolved fragment text is cleaned before splicing: the frontmatter
//! header goes, and trailing `^block-id` anchors are stripped from every
//! line. The indentation helpers support splicing a baked note into the
//! place of a single list item.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m) +\^[^ \r\n]+$").expect("block id regex"));

static FRONTMATTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---(?s:.+?)\r?\n---(?:\r?\n\s*|\z)").expect("frontmatter regex")
});

static NEWLINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r?\n)").expect("newline regex"));

static FIRST_BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(?:[-*+]|[0-9]+[.)]) +").expect("first bullet regex"));

/// Strip trailing block-reference ids (` ^id` at end of line) from every line
pub fn strip_block_ids(text: &str) -> String {
    BLOCK_ID_REGEX.replace_all(text, "").into_owned()
}

/// Remove a leading frontmatter block: a region fenced by `---` lines,
/// matched only at the very start of the text
pub fn strip_frontmatter(text: &str) -> String {
    FRONTMATTER_REGEX.replace(text, "").into_owned()
}

/// Sanitize a recursively baked fragment before splicing.
///
/// Idempotent: re-applying to already-sanitized text is a no-op.
pub fn sanitize_baked_content(text: &str) -> String {
    strip_block_ids(&strip_frontmatter(text))
}

/// Remove the first line's indentation from every line
pub fn dedent(text: &str) -> String {
    let indent_len = text.len() - text.trim_start_matches([' ', '\t']).len();
    if indent_len == 0 {
        return text.to_string();
    }
    let indent = &text[..indent_len];
    text.split_inclusive('\n')
        .map(|line| line.strip_prefix(indent).unwrap_or(line))
        .collect()
}

/// Strip a leading list bullet (`- `, `* `, `+ `, `1. `, `1) `) from the
/// first line
pub fn strip_first_bullet(text: &str) -> String {
    FIRST_BULLET_REGEX.replace(text, "").into_owned()
}

/// Trim the text and re-indent every continuation line
pub fn apply_indent(text: &str, indent: &str) -> String {
    if indent.is_empty() {
        return text.to_string();
    }
    let trimmed = text.trim();
    NEWLINE_REGEX
        .replace_all(trimmed, format!("${{1}}{indent}"))
        .into_owned()
}
