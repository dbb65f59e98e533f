//! Stock path-rewriting policy

use async_trait::async_trait;

use crate::config::Settings;
use crate::error::VaultError;
use crate::traits::PathRewriter;
use crate::types::{Frontmatter, LinkedNote, NoteFile};

/// `../`-style relative paths between vault locations.
///
/// The destination is the link-table row's override when present, otherwise
/// the target's vault path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPathRewriter;

#[async_trait]
impl PathRewriter for DefaultPathRewriter {
    async fn relative_path(
        &self,
        source: &NoteFile,
        linked: &LinkedNote,
        _frontmatter: &Frontmatter,
        _settings: &Settings,
    ) -> Result<String, VaultError> {
        let destination = linked
            .destination
            .as_deref()
            .unwrap_or(&linked.linked.path);
        Ok(relative_between(source.parent(), destination))
    }
}

/// Relative path from a directory to a target file, both vault-relative
fn relative_between(from_dir: &str, to: &str) -> String {
    let from: Vec<&str> = from_dir.split('/').filter(|c| !c.is_empty()).collect();
    let to_parts: Vec<&str> = to.split('/').filter(|c| !c.is_empty()).collect();
    let (to_dirs, file) = match to_parts.split_last() {
        Some((file, dirs)) => (dirs, *file),
        None => return String::new(),
    };

    let common = from
        .iter()
        .zip(to_dirs.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = String::new();
    for _ in common..from.len() {
        out.push_str("../");
    }
    for dir in &to_dirs[common..] {
        out.push_str(dir);
        out.push('/');
    }
    out.push_str(file);
    out
}
