//! Lib command - manage named library roots in the configuration

use colored::Colorize;

use crate::TptagsError;
use crate::cli::LibCommands;
use crate::config::TptagsConfig;

type Result<T> = std::result::Result<T, TptagsError>;

/// Execute a library registry subcommand
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or saved.
pub fn execute(command: &LibCommands, quiet: bool) -> Result<()> {
    let mut config = TptagsConfig::load()?;

    match command {
        LibCommands::Add { name, root } => {
            if !root.is_dir() && !quiet {
                println!(
                    "{} {} is not an existing directory",
                    "⚠".yellow().bold(),
                    root.display()
                );
            }
            config.add_library(name.clone(), root.clone())?;
            if !quiet {
                println!(
                    "{} Added library {} at {}",
                    "✓".green().bold(),
                    name.cyan(),
                    root.display()
                );
            }
        }
        LibCommands::List => {
            let names = config.list_libraries();
            if names.is_empty() {
                if !quiet {
                    println!("{}", "No libraries configured".dimmed());
                }
                return Ok(());
            }
            for name in names {
                let root = config
                    .get_library(name)
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                let marker = if config.get_default_library() == Some(name) {
                    " (default)"
                } else {
                    ""
                };
                if quiet {
                    println!("{name}\t{root}");
                } else {
                    println!("  {}  {}{}", name.cyan(), root, marker.dimmed());
                }
            }
        }
        LibCommands::Remove { name } => {
            match config.remove_library(name)? {
                Some(root) => {
                    if !quiet {
                        println!(
                            "{} Removed library {} (was {})",
                            "✓".green().bold(),
                            name.cyan(),
                            root.display()
                        );
                    }
                }
                None => {
                    println!("{} No library named {}", "✗".red().bold(), name.cyan());
                }
            }
        }
        LibCommands::SetDefault { name } => {
            config.set_default_library(name.clone())?;
            if !quiet {
                println!("{} Default library set to {}", "✓".green().bold(), name.cyan());
            }
        }
    }

    Ok(())
}
