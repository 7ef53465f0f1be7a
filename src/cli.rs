//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for tptags using the
//! `clap` crate: command parsing, argument validation, and resolution of
//! the library root each command operates on.
//!
//! # Commands
//!
//! - **init**: Set up the `.tptags` structure for a directory
//! - **create**: Create a tag
//! - **list**: List all tags
//! - **delete**: Delete a tag (prompts when groups reference it)
//! - **group**: Manage tag groups (create, list, delete)
//! - **lib**: Manage named library roots in the configuration
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--root` / `--library` selection of the library to operate on
//! - Command aliases (e.g., `ls` for `list`, `rm` for `delete`)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::TptagsError;
use crate::config::TptagsConfig;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tptags")]
#[command(about = "A file-backed tag library manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Library root directory to operate on (overrides config)
    #[arg(long = "root", value_name = "DIR", global = true, conflicts_with = "library")]
    pub root: Option<PathBuf>,

    /// Named library from the configuration to operate on
    #[arg(short = 'l', long = "library", value_name = "NAME", global = true)]
    pub library: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve the library root this invocation operates on
    ///
    /// Precedence: `--root` flag, then `--library` name, then the
    /// configured default library, then the current directory.
    ///
    /// # Errors
    /// Returns `TptagsError::InvalidInput` if a named library is not in the
    /// configuration, or an I/O error if the current directory is unknown.
    pub fn resolve_root(&self, config: &TptagsConfig) -> Result<PathBuf, TptagsError> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }

        let name = self.library.as_ref().or_else(|| config.get_default_library());
        if let Some(name) = name {
            return config.get_library(name).cloned().ok_or_else(|| {
                TptagsError::InvalidInput(format!("Library '{name}' is not configured"))
            });
        }

        Ok(std::env::current_dir()?)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize the .tptags structure for a library root
    Init {
        /// Seed the new library with default image/video format tags
        #[arg(long = "seed")]
        seed: bool,
    },

    /// Create a new tag
    #[command(visible_alias = "c")]
    Create {
        /// Display name for the tag
        name: String,

        /// Alternate names for the tag (can specify multiple: -a jpeg -a jpe)
        #[arg(short = 'a', long = "alias", value_name = "ALIAS", num_args = 0..)]
        aliases: Vec<String>,
    },

    /// List all tags
    #[command(visible_alias = "ls")]
    List,

    /// Delete a tag by id
    #[command(visible_alias = "rm")]
    Delete {
        /// Id of the tag to delete
        tag_id: String,

        /// Delete even when groups reference the tag (skips the prompt)
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Manage tag groups
    #[command(visible_alias = "g")]
    Group {
        #[command(subcommand)]
        command: GroupCommands,
    },

    /// Manage named libraries in the configuration
    Lib {
        #[command(subcommand)]
        command: LibCommands,
    },
}

/// Tag group subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum GroupCommands {
    /// Create a new tag group
    #[command(visible_alias = "c")]
    Create {
        /// Display name for the group
        name: String,

        /// Member tag ids (can specify multiple: -t 1842 -t 9271)
        #[arg(short = 't', long = "tag", value_name = "TAG_ID", num_args = 0..)]
        tag_ids: Vec<String>,

        /// Alternate names for the group
        #[arg(short = 'a', long = "alias", value_name = "ALIAS", num_args = 0..)]
        aliases: Vec<String>,
    },

    /// List all tag groups
    #[command(visible_alias = "ls")]
    List,

    /// Delete a tag group by id
    #[command(visible_alias = "rm")]
    Delete {
        /// Id of the group to delete
        group_id: String,
    },
}

/// Library registry subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum LibCommands {
    /// Add a named library root
    Add {
        /// Name of the library
        name: String,

        /// Path to the library root directory
        root: PathBuf,
    },

    /// List all configured libraries
    List,

    /// Remove a library from configuration (does not touch the directory)
    #[command(visible_alias = "rm")]
    Remove {
        /// Name of the library to remove
        name: String,
    },

    /// Set the default library
    #[command(name = "set-default")]
    SetDefault {
        /// Name of the library to set as default
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_with_aliases() {
        let cli = Cli::try_parse_from(["tptags", "create", "jpg", "-a", "jpeg", "-a", "jpe"])
            .unwrap();
        match cli.command {
            Commands::Create { name, aliases } => {
                assert_eq!(name, "jpg");
                assert_eq!(aliases, vec!["jpeg", "jpe"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_delete_force() {
        let cli = Cli::try_parse_from(["tptags", "rm", "1842", "--force"]).unwrap();
        match cli.command {
            Commands::Delete { tag_id, force } => {
                assert_eq!(tag_id, "1842");
                assert!(force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_group_create() {
        let cli = Cli::try_parse_from([
            "tptags", "group", "create", "image", "-t", "1842", "-t", "9271",
        ])
        .unwrap();
        match cli.command {
            Commands::Group {
                command: GroupCommands::Create { name, tag_ids, aliases },
            } => {
                assert_eq!(name, "image");
                assert_eq!(tag_ids, vec!["1842", "9271"]);
                assert!(aliases.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_root_and_library_conflict() {
        let result =
            Cli::try_parse_from(["tptags", "list", "--root", "/tmp", "--library", "photos"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_root_prefers_flag() {
        let cli = Cli::try_parse_from(["tptags", "list", "--root", "/tmp/media"]).unwrap();
        let config = TptagsConfig::default();
        let root = cli.resolve_root(&config).unwrap();
        assert_eq!(root, PathBuf::from("/tmp/media"));
    }

    #[test]
    fn test_resolve_root_from_named_library() {
        let cli = Cli::try_parse_from(["tptags", "list", "--library", "photos"]).unwrap();
        let mut config = TptagsConfig::default();
        config
            .libraries
            .insert("photos".to_string(), PathBuf::from("/data/photos"));

        let root = cli.resolve_root(&config).unwrap();
        assert_eq!(root, PathBuf::from("/data/photos"));
    }

    #[test]
    fn test_resolve_root_unknown_library_fails() {
        let cli = Cli::try_parse_from(["tptags", "list", "--library", "nope"]).unwrap();
        let config = TptagsConfig::default();
        assert!(matches!(
            cli.resolve_root(&config),
            Err(TptagsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resolve_root_falls_back_to_default_library() {
        let cli = Cli::try_parse_from(["tptags", "list"]).unwrap();
        let mut config = TptagsConfig::default();
        config
            .libraries
            .insert("photos".to_string(), PathBuf::from("/data/photos"));
        config.default_library = Some("photos".to_string());

        let root = cli.resolve_root(&config).unwrap();
        assert_eq!(root, PathBuf::from("/data/photos"));
    }
}
