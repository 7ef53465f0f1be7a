//! Init command - set up the .tptags structure for a library root

use colored::Colorize;
use std::path::Path;

use crate::{TptagsError, library};

type Result<T> = std::result::Result<T, TptagsError>;

/// Execute the init command
///
/// Idempotent: a second init reports that the library already exists and
/// leaves its document untouched.
///
/// # Errors
/// Returns an error if the library structure cannot be created.
pub fn execute(root: &Path, seed: bool, quiet: bool) -> Result<()> {
    let already_existed = library::initialize(root, seed)?;

    if quiet {
        return Ok(());
    }

    if already_existed {
        println!(
            "{} Library at {} already exists, nothing to do",
            "ℹ".blue().bold(),
            root.display()
        );
    } else if seed {
        println!(
            "{} Initialized library at {} with default tags",
            "✓".green().bold(),
            root.display()
        );
    } else {
        println!(
            "{} Initialized empty library at {}",
            "✓".green().bold(),
            root.display()
        );
    }

    Ok(())
}
