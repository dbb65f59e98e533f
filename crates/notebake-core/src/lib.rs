//! Notebake Core
//!
//! The recursive embed-baking engine: given a root note whose text contains
//! embed links (`![[Other Note]]`, `![[Other Note#Heading]]`,
//! `![[Other Note#^block]]`), replace each embed with the rendered content of
//! its target, recursively, while:
//!
//! - respecting a caller-supplied sharing/visibility policy
//! - guarding against cyclic references with a per-call ancestor set
//! - extracting heading/block subsections when the embed carries a subpath
//! - keeping later embed offsets valid via offset-drift accounting
//!
//! The core never parses markdown itself; it consumes a [`StructuralCache`]
//! produced by a host (one concrete producer lives in `notebake-parser`) and
//! reaches the host through the traits in [`traits`].

pub mod bake;
pub mod config;
pub mod error;
pub mod link;
pub mod policy;
pub mod test_support;
pub mod traits;
pub mod types;

// Re-export main types for convenience
pub use bake::{bake_embeds, bake_note, BakeContext};
pub use bake::sanitize::sanitize_baked_content;
pub use bake::subpath::extract_subpath;
pub use config::{
    BakeTemplates, ConversionSettings, EmbedConvertMode, EmbedSettings, FrontmatterTitle,
    PluginSettings, ReplaceMode, Repository, Settings, ShareAll, TextReplacer, UploadSettings,
};
pub use error::{BakeError, BakeResult, VaultError};
pub use link::parse_linktext;
pub use policy::{DefaultPathRewriter, DefaultSharePolicy, DefaultTitleResolver};
pub use traits::{PathRewriter, SharePolicy, TitleResolver, Vault};
pub use types::{
    BlockRef, EmbedRef, Frontmatter, HeadingRef, LinkedNote, ListItemRef, NoteFile, Span,
    StructuralCache, SubpathLocator,
};
