//! Frontmatter header scanning

use notebake_core::Frontmatter;
use serde_yaml::Mapping;

use crate::error::ParseError;

/// Parse a leading `---` fenced YAML header.
///
/// The opening fence must be the very first line. A missing or empty header
/// is not an error; a malformed one is reported and the note is treated as
/// having no frontmatter.
pub fn scan(content: &str) -> (Option<Frontmatter>, Option<ParseError>) {
    let Some(rest) = content.strip_prefix("---") else {
        return (None, None);
    };
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return (None, None);
    };

    let mut yaml_end = None;
    let mut offset = 0;
    for raw in rest.split_inclusive('\n') {
        if raw.trim_end_matches(['\n', '\r']) == "---" {
            yaml_end = Some(offset);
            break;
        }
        offset += raw.len();
    }
    let Some(yaml_end) = yaml_end else {
        // Unterminated header: not a frontmatter block at all
        return (None, None);
    };

    let yaml = &rest[..yaml_end];
    if yaml.trim().is_empty() {
        return (None, None);
    }
    match serde_yaml::from_str::<Mapping>(yaml) {
        Ok(mapping) => (Some(Frontmatter::new(mapping)), None),
        Err(err) => (None, Some(ParseError::frontmatter(err.to_string()))),
    }
}
