//! Settings file loading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use notebake_core::{EmbedConvertMode, Settings};

/// Load settings from a TOML file.
///
/// Without a file a bare invocation should flatten the vault, so the
/// fallback bakes every embed and shares every note; a config file gets the
/// strict serde defaults (`keep` mode, frontmatter share key).
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(unconfigured());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file {}", path.display()))
}

fn unconfigured() -> Settings {
    let mut settings = Settings::default();
    settings.embed.convert_mode = EmbedConvertMode::Bake;
    settings.plugin.share_all.enable = true;
    settings
}
