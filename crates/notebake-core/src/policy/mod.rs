//! Default policy implementations
//!
//! The engine only ever invokes the policy traits; these are the stock
//! implementations a host can use when it has no sharing or path scheme of
//! its own.

mod paths;
mod share;
mod title;

pub use paths::DefaultPathRewriter;
pub use share::DefaultSharePolicy;
pub use title::DefaultTitleResolver;
