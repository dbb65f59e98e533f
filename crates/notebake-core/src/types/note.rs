//! Note identity and link-context types

use serde::{Deserialize, Serialize};

/// Identity of a note: its vault-relative path.
///
/// All other handles (basename, extension, parent folder) are derived views
/// over the path. Equality and hashing are by path, which makes this usable
/// as the ancestor-set element during recursive baking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteFile {
    /// Vault-relative path, `/`-separated, including the extension
    pub path: String,
}

impl NoteFile {
    /// Create a note handle from a vault-relative path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// File name including the extension
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// File name without the extension
    pub fn basename(&self) -> &str {
        let name = self.name();
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        }
    }

    /// File extension, empty when there is none
    pub fn extension(&self) -> &str {
        let name = self.name();
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext,
            _ => "",
        }
    }

    /// Parent folder path, empty for vault-root notes
    pub fn parent(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some((dir, _)) => dir,
            None => "",
        }
    }

    /// Whether this note is a markdown text document.
    ///
    /// Only markdown notes can be baked; anything else is skipped by the
    /// baker and left as the original embed link.
    pub fn is_markdown(&self) -> bool {
        self.extension() == "md"
    }
}

/// A resolved embed target paired with the link context the template
/// expander needs. Rows are supplied by the caller as a lookup table keyed
/// by target identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedNote {
    /// The resolved target note
    pub linked: NoteFile,
    /// Overridden destination path, used instead of the target's vault path
    /// by the default path rewriter when present
    pub destination: Option<String>,
}

impl LinkedNote {
    /// Create a link-table row with no destination override
    pub fn new(linked: NoteFile) -> Self {
        Self {
            linked,
            destination: None,
        }
    }
}
