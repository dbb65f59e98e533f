//! The recursive baker
//!
//! Walks a note's embed references in source order, resolves each to a
//! target note, decides whether to inline it, recursively bakes the target,
//! and splices the result back into the working text while tracking the
//! offset drift earlier replacements introduce.
//!
//! Failure semantics are deliberate: unresolvable links, cycles, and
//! policy-excluded targets are silent skips that leave the original embed
//! text in place. One bad embed never blocks the rest of the document.
//! Host I/O errors are the only way a bake fails.

pub mod sanitize;
pub mod subpath;
pub mod template;

use std::collections::HashSet;
use std::sync::LazyLock;

use futures::future::{BoxFuture, FutureExt};
use regex::Regex;
use tracing::{debug, trace};

use crate::config::{Repository, Settings};
use crate::error::BakeResult;
use crate::link::parse_linktext;
use crate::traits::{PathRewriter, SharePolicy, TitleResolver, Vault};
use crate::types::{LinkedNote, NoteFile};
use sanitize::{apply_indent, sanitize_baked_content, strip_first_bullet};
use subpath::extract_subpath;
use template::{expand_title, expand_url};

/// Detects an embed sitting in the place of a list item: the working text
/// up to the embed must end with optional indentation and a bullet marker
/// at the start of a line. Group 1 is the whole bullet prefix, group 2 the
/// indentation alone.
static LIST_BULLET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\A|\n)(([ \t]*)(?:[-*+]|[0-9]+[.)]) +)\z").expect("list bullet regex")
});

/// Caller-supplied, read-only bundle controlling one bake invocation:
/// settings, target repository, and the injected policy capabilities.
#[derive(Clone, Copy)]
pub struct BakeContext<'a> {
    /// Global settings
    pub settings: &'a Settings,
    /// Repository the bake is destined for, when configured
    pub repository: Option<&'a Repository>,
    /// Visibility policy
    pub share: &'a dyn SharePolicy,
    /// Path-rewriting policy behind `{{url}}`
    pub paths: &'a dyn PathRewriter,
    /// Title policy behind `{{title}}`
    pub titles: &'a dyn TitleResolver,
}

/// Bake a root note with an empty ancestor chain and no subpath request
pub async fn bake_note(
    note: &NoteFile,
    host: &dyn Vault,
    ctx: &BakeContext<'_>,
    link_table: &[LinkedNote],
) -> BakeResult<String> {
    bake_embeds(note.clone(), HashSet::new(), host, ctx, None, link_table).await
}

/// Recursively inline every qualifying embed of `note`.
///
/// `ancestors` is the set of notes on the active recursion path; a fresh
/// copy augmented with `note` is threaded into each child call, so sibling
/// branches never see each other. `subpath`, when present, narrows the
/// note's own text to one heading or block subsection before its embeds
/// are processed.
///
/// Always returns best-effort text; see the module docs for the skip
/// taxonomy.
pub fn bake_embeds<'a>(
    note: NoteFile,
    ancestors: HashSet<NoteFile>,
    host: &'a dyn Vault,
    ctx: &'a BakeContext<'a>,
    subpath: Option<String>,
    link_table: &'a [LinkedNote],
) -> BoxFuture<'a, BakeResult<String>> {
    async move {
        let mut text = host.read(&note).await?;

        // Without structural metadata no embeds can be resolved
        let Some(cache) = host.metadata(&note) else {
            debug!(note = %note.path, "no structural cache, returning raw text");
            return Ok(text);
        };

        if let Some(sub) = subpath.as_deref() {
            if let Some(locator) = cache.resolve_subpath(sub) {
                text = extract_subpath(&text, &locator, &cache);
            }
        }

        if cache.embeds.is_empty() {
            return Ok(text);
        }

        // Callers supply spans in parse order but not necessarily final order
        let mut targets = cache.embeds.clone();
        targets.sort_by_key(|embed| embed.span.start);

        let mut new_ancestors = ancestors;
        new_ancestors.insert(note.clone());

        let mut drift: isize = 0;
        for embed in &targets {
            let (path, embed_subpath) = parse_linktext(&embed.link);
            let Some(linked) = host.resolve_link(path, &note.path) else {
                trace!(link = %embed.link, "embed does not resolve, leaving verbatim");
                continue;
            };
            if !linked.is_markdown() {
                trace!(target = %linked.path, "embed target is not markdown, leaving verbatim");
                continue;
            }

            let start = (embed.span.start as isize + drift) as usize;
            let end = (embed.span.end as isize + drift) as usize;
            // A requested-subpath extraction narrows the working text while
            // the cache still describes the full document; embeds lying
            // outside the extracted range are skipped, never spliced.
            if end > text.len()
                || end < start
                || !text.is_char_boundary(start)
                || !text.is_char_boundary(end)
            {
                trace!(link = %embed.link, "embed span outside the working text, leaving out");
                continue;
            }
            let original_len = end - start;

            let linked_cache = host.metadata(&linked);
            let frontmatter = linked_cache.as_ref().and_then(|c| c.frontmatter.clone());
            let shared =
                ctx.share
                    .is_shared(frontmatter.as_ref(), ctx.settings, &linked, ctx.repository);
            if new_ancestors.contains(&linked) {
                debug!(target = %linked.path, "cyclic embed, leaving verbatim");
                continue;
            }
            if !shared {
                debug!(target = %linked.path, "target not shared, leaving verbatim");
                continue;
            }

            let baked = bake_embeds(
                linked.clone(),
                new_ancestors.clone(),
                host,
                ctx,
                embed_subpath.map(str::to_string),
                link_table,
            )
            .await?;
            let baked = sanitize_baked_content(&baked);

            // An embed alone on a bullet line takes the place of that list
            // item: its own first bullet goes, continuation lines line up
            // under the host bullet's content column.
            let before = &text[..start];
            let mut replacement = match LIST_BULLET_REGEX.captures(before) {
                Some(caps) => {
                    let prefix = &caps[1];
                    let ws = &caps[2];
                    let indent = format!("{}{}", ws, " ".repeat(prefix.len() - ws.len()));
                    apply_indent(&strip_first_bullet(&baked), &indent)
                }
                None => baked,
            };

            if let Some(bake_cfg) = ctx.settings.embed.bake.as_ref() {
                if let Some(tpl) = bake_cfg.after() {
                    let expanded =
                        expand_url(tpl, &linked, &note, frontmatter.as_ref(), ctx, link_table)
                            .await?;
                    let expanded = expand_title(&expanded, &linked, frontmatter.as_ref(), ctx);
                    let newline = if replacement.contains(char::is_whitespace) {
                        ""
                    } else {
                        "\n"
                    };
                    replacement = format!("{replacement}{newline}{expanded}");
                }
                if let Some(tpl) = bake_cfg.before() {
                    let expanded =
                        expand_url(tpl, &linked, &note, frontmatter.as_ref(), ctx, link_table)
                            .await?;
                    let expanded = expand_title(&expanded, &linked, frontmatter.as_ref(), ctx);
                    replacement = format!("{expanded}\n{replacement}");
                }
            }

            text = format!("{}{}{}", &text[..start], replacement, &text[end..]);
            drift += replacement.len() as isize - original_len as isize;
        }

        Ok(text)
    }
    .boxed()
}
