//! Stock title policy

use regex::Regex;
use tracing::warn;

use crate::config::{ReplaceMode, Settings, TextReplacer};
use crate::traits::TitleResolver;
use crate::types::{Frontmatter, NoteFile};

/// Frontmatter-derived titles with filename rewrite rules.
///
/// When the frontmatter title is enabled and the configured key is present,
/// its value is the starting title; otherwise the note's file name is.
/// The result is run through the ordered `replace_title` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTitleResolver;

impl TitleResolver for DefaultTitleResolver {
    fn title_for(
        &self,
        note: &NoteFile,
        frontmatter: Option<&Frontmatter>,
        settings: &Settings,
    ) -> String {
        let title_cfg = &settings.upload.frontmatter_title;
        let raw = if title_cfg.enable {
            frontmatter
                .and_then(|fm| fm.get_str(&title_cfg.key))
                .map(str::to_string)
                .unwrap_or_else(|| note.name().to_string())
        } else {
            note.name().to_string()
        };
        apply_replacers(&raw, &settings.upload.replace_title)
    }
}

fn apply_replacers(title: &str, rules: &[TextReplacer]) -> String {
    rules.iter().fold(title.to_string(), |acc, rule| {
        match rule.mode {
            ReplaceMode::Text => acc.replace(&rule.pattern, &rule.replacement),
            ReplaceMode::Regex => match Regex::new(&rule.pattern) {
                Ok(re) => re.replace_all(&acc, rule.replacement.as_str()).into_owned(),
                Err(err) => {
                    warn!(pattern = %rule.pattern, %err, "invalid title replace rule, skipping");
                    acc
                }
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontmatterTitle;

    fn frontmatter(yaml: &str) -> Frontmatter {
        Frontmatter::new(serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_filename_when_disabled() {
        let settings = Settings::default();
        let title = DefaultTitleResolver.title_for(
            &NoteFile::new("dir/Note.md"),
            Some(&frontmatter("title: Ignored")),
            &settings,
        );
        assert_eq!(title, "Note.md");
    }

    #[test]
    fn test_frontmatter_title_when_enabled() {
        let mut settings = Settings::default();
        settings.upload.frontmatter_title = FrontmatterTitle {
            enable: true,
            key: "title".to_string(),
        };
        let title = DefaultTitleResolver.title_for(
            &NoteFile::new("dir/Note.md"),
            Some(&frontmatter("title: Proper Title")),
            &settings,
        );
        assert_eq!(title, "Proper Title");
    }

    #[test]
    fn test_missing_key_falls_back_to_filename() {
        let mut settings = Settings::default();
        settings.upload.frontmatter_title.enable = true;
        let title = DefaultTitleResolver.title_for(
            &NoteFile::new("Note.md"),
            Some(&frontmatter("other: x")),
            &settings,
        );
        assert_eq!(title, "Note.md");
    }

    #[test]
    fn test_replace_rules_applied_in_order() {
        let mut settings = Settings::default();
        settings.upload.replace_title = vec![
            TextReplacer {
                pattern: " ".to_string(),
                replacement: "-".to_string(),
                mode: ReplaceMode::Text,
            },
            TextReplacer {
                pattern: "(?i)draft-".to_string(),
                replacement: String::new(),
                mode: ReplaceMode::Regex,
            },
        ];
        let title = DefaultTitleResolver.title_for(
            &NoteFile::new("Draft Note.md"),
            None,
            &settings,
        );
        assert_eq!(title, "Note.md");
    }

    #[test]
    fn test_invalid_regex_rule_is_skipped() {
        let mut settings = Settings::default();
        settings.upload.replace_title = vec![TextReplacer {
            pattern: "(".to_string(),
            replacement: "x".to_string(),
            mode: ReplaceMode::Regex,
        }];
        let title =
            DefaultTitleResolver.title_for(&NoteFile::new("Note.md"), None, &settings);
        assert_eq!(title, "Note.md");
    }
}
