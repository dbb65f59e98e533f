//! Error types for the bake engine

use std::io;
use thiserror::Error;

/// Errors raised by host vault implementations
#[derive(Debug, Error)]
pub enum VaultError {
    /// IO error reading a note
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Note does not exist in the vault
    #[error("note not found: {path}")]
    NotFound {
        /// Vault-relative path that failed to resolve
        path: String,
    },

    /// Note exists but is not a text document
    #[error("not a text note: {path}")]
    NotText {
        /// Vault-relative path of the offending note
        path: String,
    },
}

impl VaultError {
    /// Create a not-found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a not-text error
    pub fn not_text(path: impl Into<String>) -> Self {
        Self::NotText { path: path.into() }
    }
}

/// Bake failure. The bake algorithm itself never fails on a bad embed
/// (those are silently skipped); the only error source is host I/O.
#[derive(Debug, Error)]
pub enum BakeError {
    /// Host I/O failure propagated uncaught
    #[error(transparent)]
    Vault(#[from] VaultError),
}

/// Specialized Result type for bake operations
pub type BakeResult<T> = Result<T, BakeError>;
