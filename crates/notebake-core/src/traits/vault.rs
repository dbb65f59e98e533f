//! Document store and link resolution seam

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::VaultError;
use crate::types::{NoteFile, StructuralCache};

/// The host's document store, metadata cache, and link resolver.
///
/// Reads are asynchronous; metadata and link resolution are lookups over
/// state the host already holds. Implementations must be safe for
/// concurrent reads: independent top-level bakes may run at the same time.
#[async_trait]
pub trait Vault: Send + Sync {
    /// Read the current text of a note
    async fn read(&self, note: &NoteFile) -> Result<String, VaultError>;

    /// Structural metadata for a note, `None` when the host has no cache
    /// entry. Without metadata no embeds can be resolved and the baker
    /// returns the raw text unchanged.
    fn metadata(&self, note: &NoteFile) -> Option<Arc<StructuralCache>>;

    /// Resolve a bare link path to a note, relative to the linking note's
    /// path. `None` when the link does not resolve.
    fn resolve_link(&self, link_path: &str, context_path: &str) -> Option<NoteFile>;
}
