//! Filesystem vault
//!
//! Loads every note under the vault root up front: markdown files are read
//! and scanned into structural caches, other files are remembered so embeds
//! pointing at them resolve (and get skipped as non-text by the baker).

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};
use walkdir::WalkDir;

use notebake_core::{
    parse_linktext, LinkedNote, NoteFile, StructuralCache, Vault, VaultError,
};

/// An in-memory snapshot of a vault directory implementing [`Vault`]
#[derive(Debug, Default)]
pub struct FsVault {
    notes: HashMap<String, String>,
    caches: HashMap<String, Arc<StructuralCache>>,
    assets: HashSet<String>,
}

impl FsVault {
    /// Walk `root` and load every file beneath it
    pub fn load(root: &Path) -> Result<Self> {
        let mut vault = Self::default();
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");
            if rel.ends_with(".md") {
                let text = std::fs::read_to_string(entry.path())
                    .with_context(|| format!("failed to read note {rel}"))?;
                let parsed = notebake_parser::parse_note(&text);
                for error in &parsed.errors {
                    warn!(note = %rel, %error, "scan issue");
                }
                vault.caches.insert(rel.clone(), Arc::new(parsed.cache));
                vault.notes.insert(rel, text);
            } else {
                vault.assets.insert(rel);
            }
        }
        debug!(
            notes = vault.notes.len(),
            assets = vault.assets.len(),
            "vault loaded"
        );
        Ok(vault)
    }

    /// Number of markdown notes in the snapshot
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Walk the embed graph from `root` and build the link table the
    /// template expander consumes: one row per reachable embed target.
    pub fn collect_linked(&self, root: &NoteFile) -> Vec<LinkedNote> {
        let mut table = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut queue = VecDeque::from([root.clone()]);
        seen.insert(root.path.clone());

        while let Some(note) = queue.pop_front() {
            let Some(cache) = self.caches.get(&note.path) else {
                continue;
            };
            for embed in &cache.embeds {
                let (path, _subpath) = parse_linktext(&embed.link);
                let Some(linked) = self.resolve_link(path, &note.path) else {
                    continue;
                };
                if !seen.insert(linked.path.clone()) {
                    continue;
                }
                if linked.is_markdown() {
                    queue.push_back(linked.clone());
                }
                table.push(LinkedNote::new(linked));
            }
        }
        table
    }
}

#[async_trait]
impl Vault for FsVault {
    async fn read(&self, note: &NoteFile) -> Result<String, VaultError> {
        if self.assets.contains(&note.path) {
            return Err(VaultError::not_text(&note.path));
        }
        self.notes
            .get(&note.path)
            .cloned()
            .ok_or_else(|| VaultError::not_found(&note.path))
    }

    fn metadata(&self, note: &NoteFile) -> Option<Arc<StructuralCache>> {
        self.caches.get(&note.path).cloned()
    }

    fn resolve_link(&self, link_path: &str, _context_path: &str) -> Option<NoteFile> {
        if link_path.is_empty() {
            return None;
        }
        if self.notes.contains_key(link_path) || self.assets.contains(link_path) {
            return Some(NoteFile::new(link_path));
        }
        let with_ext = format!("{link_path}.md");
        if self.notes.contains_key(&with_ext) {
            return Some(NoteFile::new(with_ext));
        }
        // Bare-name lookup across the vault, shortest path wins
        let mut candidates: Vec<&String> = self
            .notes
            .keys()
            .chain(self.assets.iter())
            .filter(|path| {
                let note = NoteFile::new(path.as_str());
                note.basename() == link_path || note.name() == link_path
            })
            .collect();
        candidates.sort();
        candidates.first().map(|path| NoteFile::new(path.as_str()))
    }
}
