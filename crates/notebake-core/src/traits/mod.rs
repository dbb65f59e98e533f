//! Host-interface seams
//!
//! The engine reaches the host environment (document store, metadata cache,
//! link resolver) and the externally defined policies (sharing, path
//! rewriting, title resolution) only through these traits. The core
//! hardcodes none of the policy logic; it invokes the capability it is
//! given.

mod policy;
mod vault;

pub use policy::{PathRewriter, SharePolicy, TitleResolver};
pub use vault::Vault;
