//! Tptags - a file-backed tag library manager for media directories
//!
//! This library manages named tags (with aliases and stable identifiers)
//! and tag groups for a directory of media assets, persisted as a single
//! JSON document under the directory's `.tptags` folder.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod library;
pub mod output;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TptagsError {
    /// Library store or manager error
    #[error("Library error: {0}")]
    LibraryError(#[from] library::LibraryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
