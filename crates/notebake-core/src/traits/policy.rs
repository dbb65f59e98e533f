//! Externally defined policy seams

use async_trait::async_trait;

use crate::config::{Repository, Settings};
use crate::error::VaultError;
use crate::types::{Frontmatter, LinkedNote, NoteFile};

/// The "is this note allowed to be inlined" check.
///
/// Evaluated against the target's own frontmatter, the global settings, and
/// the configured repository. A `false` answer is a hard skip, not an
/// error: the embed is left as the original link text and the target is
/// never read.
pub trait SharePolicy: Send + Sync {
    /// Whether `note` may be inlined
    fn is_shared(
        &self,
        frontmatter: Option<&Frontmatter>,
        settings: &Settings,
        note: &NoteFile,
        repository: Option<&Repository>,
    ) -> bool;
}

/// Path-rewriting policy behind the `{{url}}` placeholder
#[async_trait]
pub trait PathRewriter: Send + Sync {
    /// Compute the path from `source` to the linked note
    async fn relative_path(
        &self,
        source: &NoteFile,
        linked: &LinkedNote,
        frontmatter: &Frontmatter,
        settings: &Settings,
    ) -> Result<String, VaultError>;
}

/// Title resolution policy behind the `{{title}}` placeholder
pub trait TitleResolver: Send + Sync {
    /// Display title for `note`, derived from frontmatter and settings
    fn title_for(
        &self,
        note: &NoteFile,
        frontmatter: Option<&Frontmatter>,
        settings: &Settings,
    ) -> String;
}
