//! Configuration for baking and sharing
//!
//! Owned by the caller, read-only to the engine. Optional behavior (bake
//! templates, share-all mode, title rewriting) is modelled as explicit
//! optional fields rather than ad-hoc nullable lookups.

use serde::{Deserialize, Serialize};

/// Top-level settings bundle consumed by the baker and the default policies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Embed handling
    pub embed: EmbedSettings,
    /// Sharing rules
    pub plugin: PluginSettings,
    /// Title resolution rules
    pub upload: UploadSettings,
    /// Link conversion rules
    pub conversion: ConversionSettings,
}

/// How embeds are treated during conversion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedSettings {
    /// Conversion mode; only [`EmbedConvertMode::Bake`] engages the baker
    pub convert_mode: EmbedConvertMode,
    /// Optional wrapper templates applied around each baked embed
    pub bake: Option<BakeTemplates>,
}

/// Embed conversion mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedConvertMode {
    /// Leave embeds as-is
    #[default]
    Keep,
    /// Remove embeds entirely
    Remove,
    /// Convert embeds to plain links
    Links,
    /// Inline the target content recursively
    Bake,
}

/// Optional text blocks spliced before/after each baked embed.
///
/// Both support the `{{url}}` and `{{title}}` placeholders, matched
/// case-insensitively. Empty strings behave like absent templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeTemplates {
    /// Text prepended to the baked content, followed by a newline
    pub text_before: Option<String>,
    /// Text appended after the baked content
    pub text_after: Option<String>,
}

impl BakeTemplates {
    /// `text_before`, treating the empty string as absent
    pub fn before(&self) -> Option<&str> {
        self.text_before.as_deref().filter(|s| !s.is_empty())
    }

    /// `text_after`, treating the empty string as absent
    pub fn after(&self) -> Option<&str> {
        self.text_after.as_deref().filter(|s| !s.is_empty())
    }
}

/// Sharing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Frontmatter key that marks a note as shared
    pub share_key: String,
    /// Share-everything mode
    pub share_all: ShareAll,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            share_key: "share".to_string(),
            share_all: ShareAll::default(),
        }
    }
}

/// Share-everything mode: every note is shared except those whose file name
/// starts with one of the excluded prefixes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareAll {
    /// Whether share-all mode is on
    pub enable: bool,
    /// File-name prefixes excluded from sharing
    pub excluded_names: Vec<String>,
}

/// Title resolution configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    /// Frontmatter-derived titles
    pub frontmatter_title: FrontmatterTitle,
    /// Ordered find/replace rules applied to resolved titles
    pub replace_title: Vec<TextReplacer>,
}

/// Use a frontmatter field as the display title
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontmatterTitle {
    /// Whether the frontmatter title is used at all
    pub enable: bool,
    /// Frontmatter key holding the title
    pub key: String,
}

impl Default for FrontmatterTitle {
    fn default() -> Self {
        Self {
            enable: false,
            key: "title".to_string(),
        }
    }
}

/// A single find/replace rule for title rewriting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextReplacer {
    /// Pattern to find: a regex or a literal, per `mode`
    pub pattern: String,
    /// Replacement text
    pub replacement: String,
    /// How `pattern` is interpreted
    #[serde(default)]
    pub mode: ReplaceMode,
}

/// Interpretation of a [`TextReplacer`] pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    /// Literal substring replacement
    #[default]
    Text,
    /// Regular-expression replacement
    Regex,
}

/// Internal-link conversion rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// When on, `{{url}}` expands to a path relative to the source note;
    /// when off, to the target's vault path
    pub convert_internal_links: bool,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            convert_internal_links: true,
        }
    }
}

/// The configured target repository a bake is destined for. Sharing
/// policies may scope the share key per repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,
    /// Repository-specific share key overriding the global one
    #[serde(default)]
    pub share_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.embed.convert_mode, EmbedConvertMode::Keep);
        assert!(settings.embed.bake.is_none());
        assert_eq!(settings.plugin.share_key, "share");
        assert!(!settings.plugin.share_all.enable);
        assert!(settings.conversion.convert_internal_links);
        assert_eq!(settings.upload.frontmatter_title.key, "title");
    }

    #[test]
    fn test_empty_templates_count_as_absent() {
        let templates = BakeTemplates {
            text_before: Some(String::new()),
            text_after: Some("after".to_string()),
        };
        assert_eq!(templates.before(), None);
        assert_eq!(templates.after(), Some("after"));
    }

    #[test]
    fn test_settings_deserialize_partial_toml() {
        let settings: Settings = serde_yaml::from_str(
            r#"
embed:
  convert_mode: bake
  bake:
    text_before: "From {{title}}"
plugin:
  share_all:
    enable: true
"#,
        )
        .unwrap();
        assert_eq!(settings.embed.convert_mode, EmbedConvertMode::Bake);
        assert_eq!(
            settings.embed.bake.unwrap().before(),
            Some("From {{title}}")
        );
        assert!(settings.plugin.share_all.enable);
        // Untouched sections keep defaults
        assert_eq!(settings.plugin.share_key, "share");
    }
}
