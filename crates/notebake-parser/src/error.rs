//! Scanner error types

use thiserror::Error;

/// Recoverable scan error
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Frontmatter header did not parse as a YAML mapping
    #[error("frontmatter parse error: {0}")]
    Frontmatter(String),
}

impl ParseError {
    /// Create a frontmatter error
    pub fn frontmatter(msg: impl Into<String>) -> Self {
        Self::Frontmatter(msg.into())
    }
}
