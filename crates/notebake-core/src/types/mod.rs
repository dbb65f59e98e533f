//! Data model for the bake engine

mod cache;
mod frontmatter;
mod note;

pub use cache::{
    BlockRef, EmbedRef, HeadingRef, ListItemRef, Span, StructuralCache, SubpathLocator,
};
pub use frontmatter::Frontmatter;
pub use note::{LinkedNote, NoteFile};
