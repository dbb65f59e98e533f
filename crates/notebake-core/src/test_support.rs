//! In-memory vault for driving the baker without a host
//!
//! Deterministic and observable: every `read` is recorded so tests can
//! assert which notes were actually opened (policy skips must never read
//! their target).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::VaultError;
use crate::traits::Vault;
use crate::types::{NoteFile, StructuralCache};

/// An in-memory note store implementing [`Vault`]
#[derive(Debug, Default)]
pub struct MemoryVault {
    notes: HashMap<String, StoredNote>,
    reads: Mutex<Vec<String>>,
}

#[derive(Debug)]
struct StoredNote {
    text: String,
    cache: Option<Arc<StructuralCache>>,
}

impl MemoryVault {
    /// Create an empty vault
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a note with its structural cache (`None` simulates a missing
    /// metadata entry)
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        text: impl Into<String>,
        cache: Option<StructuralCache>,
    ) {
        self.notes.insert(
            path.into(),
            StoredNote {
                text: text.into(),
                cache: cache.map(Arc::new),
            },
        );
    }

    /// Paths read so far, in order
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().expect("reads lock").clone()
    }
}

#[async_trait]
impl Vault for MemoryVault {
    async fn read(&self, note: &NoteFile) -> Result<String, VaultError> {
        self.reads
            .lock()
            .expect("reads lock")
            .push(note.path.clone());
        self.notes
            .get(&note.path)
            .map(|stored| stored.text.clone())
            .ok_or_else(|| VaultError::not_found(&note.path))
    }

    fn metadata(&self, note: &NoteFile) -> Option<Arc<StructuralCache>> {
        self.notes.get(&note.path)?.cache.clone()
    }

    fn resolve_link(&self, link_path: &str, _context_path: &str) -> Option<NoteFile> {
        if link_path.is_empty() {
            return None;
        }
        if self.notes.contains_key(link_path) {
            return Some(NoteFile::new(link_path));
        }
        let with_ext = format!("{link_path}.md");
        if self.notes.contains_key(&with_ext) {
            return Some(NoteFile::new(with_ext));
        }
        // Basename match anywhere in the vault, shortest path wins
        let mut candidates: Vec<&String> = self
            .notes
            .keys()
            .filter(|path| {
                let note = NoteFile::new(path.as_str());
                note.basename() == link_path || note.name() == link_path
            })
            .collect();
        candidates.sort();
        candidates.first().map(|path| NoteFile::new(path.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_records_and_returns_text() {
        let mut vault = MemoryVault::new();
        vault.insert("a.md", "hello", None);
        let text = vault.read(&NoteFile::new("a.md")).await.unwrap();
        assert_eq!(text, "hello");
        assert_eq!(vault.reads(), vec!["a.md".to_string()]);
    }

    #[tokio::test]
    async fn test_read_missing_note_errors() {
        let vault = MemoryVault::new();
        let err = vault.read(&NoteFile::new("nope.md")).await.unwrap_err();
        assert!(matches!(err, VaultError::NotFound { .. }));
    }

    #[test]
    fn test_resolve_link_variants() {
        let mut vault = MemoryVault::new();
        vault.insert("folder/Note.md", "", None);
        vault.insert("Other.md", "", None);

        assert_eq!(
            vault.resolve_link("folder/Note.md", "root.md"),
            Some(NoteFile::new("folder/Note.md"))
        );
        assert_eq!(
            vault.resolve_link("Other", "root.md"),
            Some(NoteFile::new("Other.md"))
        );
        assert_eq!(
            vault.resolve_link("Note", "root.md"),
            Some(NoteFile::new("folder/Note.md"))
        );
        assert_eq!(vault.resolve_link("Missing", "root.md"), None);
    }
}
