//! Stock sharing policy

use crate::config::{Repository, Settings};
use crate::traits::SharePolicy;
use crate::types::{Frontmatter, NoteFile};

/// Share-key based visibility.
///
/// In share-all mode every note is shared except those whose file name
/// starts with an excluded prefix. Otherwise a note is shared only when its
/// frontmatter sets the share key to `true`; the repository may override
/// which key is consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSharePolicy;

impl SharePolicy for DefaultSharePolicy {
    fn is_shared(
        &self,
        frontmatter: Option<&Frontmatter>,
        settings: &Settings,
        note: &NoteFile,
        repository: Option<&Repository>,
    ) -> bool {
        let share_all = &settings.plugin.share_all;
        if share_all.enable {
            return !share_all
                .excluded_names
                .iter()
                .any(|prefix| !prefix.is_empty() && note.name().starts_with(prefix.as_str()));
        }
        let key = repository
            .and_then(|repo| repo.share_key.as_deref())
            .unwrap_or(&settings.plugin.share_key);
        frontmatter
            .and_then(|fm| fm.get_bool(key))
            .unwrap_or(false)
    }
}
