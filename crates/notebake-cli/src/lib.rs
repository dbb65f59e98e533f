//! Notebake CLI library
//!
//! The binary is a thin wrapper: vault loading, settings, and command
//! implementations live here so integration tests can drive them directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod vault;
