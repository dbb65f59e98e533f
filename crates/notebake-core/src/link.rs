//! Raw linktext parsing

/// Split a raw linktext into its bare path and optional subpath fragment.
///
/// `Note#Heading` becomes `("Note", Some("#Heading"))`; the returned
/// subpath keeps its leading `#` so it can be handed straight to
/// [`crate::StructuralCache::resolve_subpath`]. Alias text after `|` is
/// dropped; cached linktexts should not carry one, but raw input can.
pub fn parse_linktext(raw: &str) -> (&str, Option<&str>) {
    let raw = match raw.split_once('|') {
        Some((link, _alias)) => link,
        None => raw,
    };
    match raw.find('#') {
        Some(idx) => (&raw[..idx], Some(&raw[idx..])),
        None => (raw, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_link() {
        assert_eq!(parse_linktext("Note"), ("Note", None));
        assert_eq!(parse_linktext("folder/Note"), ("folder/Note", None));
    }

    #[test]
    fn test_heading_subpath() {
        assert_eq!(
            parse_linktext("Note#Heading"),
            ("Note", Some("#Heading"))
        );
    }

    #[test]
    fn test_block_subpath() {
        assert_eq!(
            parse_linktext("Note#^abc123"),
            ("Note", Some("#^abc123"))
        );
    }

    #[test]
    fn test_alias_is_dropped() {
        assert_eq!(parse_linktext("Note|shown text"), ("Note", None));
        assert_eq!(
            parse_linktext("Note#Heading|shown"),
            ("Note", Some("#Heading"))
        );
    }

    #[test]
    fn test_bare_subpath() {
        // Self-reference: empty path, subpath only
        assert_eq!(parse_linktext("#Heading"), ("", Some("#Heading")));
    }
}
