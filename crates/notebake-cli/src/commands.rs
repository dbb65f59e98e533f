//! Command implementations

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing::{info, warn};

use notebake_core::{
    bake_embeds, parse_linktext, BakeContext, DefaultPathRewriter, DefaultSharePolicy,
    DefaultTitleResolver, EmbedConvertMode, NoteFile, Settings, StructuralCache, Vault,
};

use crate::vault::FsVault;

/// Convert the embeds of `note` per the configured mode; only
/// [`EmbedConvertMode::Bake`] inlines target content
pub async fn bake(
    vault_root: &Path,
    settings: &Settings,
    note: &str,
    subpath: Option<String>,
) -> Result<String> {
    let vault = FsVault::load(vault_root)
        .with_context(|| format!("failed to load vault at {}", vault_root.display()))?;
    let root = resolve_note(&vault, note)?;

    let mode = settings.embed.convert_mode;
    if mode != EmbedConvertMode::Bake {
        if subpath.is_some() {
            warn!(?mode, "--subpath only applies when embeds are baked, ignoring");
        }
        let text = vault.read(&root).await?;
        let Some(cache) = vault.metadata(&root) else {
            return Ok(text);
        };
        return Ok(convert_embeds(&text, &cache, mode));
    }

    let link_table = vault.collect_linked(&root);
    info!(note = %root.path, linked = link_table.len(), "baking");

    let share = DefaultSharePolicy;
    let paths = DefaultPathRewriter;
    let titles = DefaultTitleResolver;
    let ctx = BakeContext {
        settings,
        repository: None,
        share: &share,
        paths: &paths,
        titles: &titles,
    };

    let baked = bake_embeds(
        root,
        Default::default(),
        &vault,
        &ctx,
        subpath,
        &link_table,
    )
    .await?;
    Ok(baked)
}

/// Non-baking embed conversion: `keep` leaves the text as-is, `remove`
/// deletes each embed marker, `links` turns it into a plain wikilink
fn convert_embeds(text: &str, cache: &StructuralCache, mode: EmbedConvertMode) -> String {
    if mode == EmbedConvertMode::Keep || cache.embeds.is_empty() {
        return text.to_string();
    }
    let mut targets = cache.embeds.clone();
    targets.sort_by_key(|embed| embed.span.start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for embed in &targets {
        if embed.span.start < cursor || embed.span.end > text.len() {
            continue;
        }
        out.push_str(&text[cursor..embed.span.start]);
        if mode == EmbedConvertMode::Links {
            out.push_str("[[");
            out.push_str(&embed.link);
            out.push_str("]]");
        }
        cursor = embed.span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Report the embeds of `note` and how each one resolves
pub fn scan(vault_root: &Path, note: &str, as_json: bool) -> Result<String> {
    let vault = FsVault::load(vault_root)
        .with_context(|| format!("failed to load vault at {}", vault_root.display()))?;
    let root = resolve_note(&vault, note)?;
    let cache = vault
        .metadata(&root)
        .with_context(|| format!("{} has no structural metadata", root.path))?;

    if as_json {
        let rows: Vec<_> = cache
            .embeds
            .iter()
            .map(|embed| {
                let (path, subpath) = parse_linktext(&embed.link);
                let resolved = vault.resolve_link(path, &root.path);
                json!({
                    "link": embed.link,
                    "start": embed.span.start,
                    "end": embed.span.end,
                    "subpath": subpath,
                    "resolved": resolved.map(|n| n.path),
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&json!({
            "note": root.path,
            "embeds": rows,
        }))?);
    }

    let mut out = String::new();
    out.push_str(&format!("{}: {} embed(s)\n", root.path, cache.embeds.len()));
    for embed in &cache.embeds {
        let (path, _) = parse_linktext(&embed.link);
        let status = match vault.resolve_link(path, &root.path) {
            Some(target) if target.is_markdown() => format!("-> {}", target.path),
            Some(target) => format!("-> {} (not markdown)", target.path),
            None => "unresolved".to_string(),
        };
        out.push_str(&format!(
            "  {:>5}..{:<5} {} {}\n",
            embed.span.start, embed.span.end, embed.link, status
        ));
    }
    Ok(out)
}

fn resolve_note(vault: &FsVault, note: &str) -> Result<NoteFile> {
    let (path, _) = parse_linktext(note);
    match vault.resolve_link(path, "") {
        Some(found) if found.is_markdown() => Ok(found),
        Some(found) => bail!("{} is not a markdown note", found.path),
        None => bail!("no note named {note} in the vault"),
    }
}
