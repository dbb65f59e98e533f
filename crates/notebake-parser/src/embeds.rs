//! Embed reference scanning
//!
//! Finds `![[linktext]]` markers outside code. Plain `[[wikilinks]]` are
//! not embeds and are ignored; alias text after `|` is dropped from the
//! stored linktext.

use notebake_core::{EmbedRef, Span};
use regex::Regex;
use std::sync::LazyLock;

static EMBED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[\[([^\[\]]+)\]\]").expect("embed regex"));

static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^```[\s\S]*?^```|^    .*$|`[^`\n]+`").expect("code region regex")
});

/// Scan content for embed references, in source order
pub fn scan(content: &str) -> Vec<EmbedRef> {
    if !content.contains("![[") {
        return Vec::new();
    }

    let code_regions: Vec<(usize, usize)> = CODE_REGEX
        .find_iter(content)
        .map(|m| (m.start(), m.end()))
        .collect();
    let in_code = |offset: usize| {
        code_regions
            .iter()
            .any(|&(start, end)| offset >= start && offset < end)
    };

    let mut embeds = Vec::new();
    for caps in EMBED_REGEX.captures_iter(content) {
        let full = caps.get(0).expect("match group");
        if caps.get(1).map(|m| m.as_str()).unwrap_or("").is_empty() {
            continue;
        }
        if in_code(full.start()) {
            continue;
        }
        let inner = caps.get(2).expect("linktext group").as_str();
        let link = match inner.split_once('|') {
            Some((link, _alias)) => link,
            None => inner,
        };
        embeds.push(EmbedRef {
            link: link.to_string(),
            span: Span::new(full.start(), full.end()),
        });
    }
    embeds
}
