//! Tag commands - create, list, and delete tags

use colored::Colorize;
use dialoguer::Confirm;
use std::path::Path;

use crate::library::{self, DeleteTagOutcome};
use crate::{TptagsError, output};

type Result<T> = std::result::Result<T, TptagsError>;

/// Create a tag and print it
///
/// # Errors
/// Returns an error if the library is not initialized or the save fails.
pub fn create(root: &Path, name: &str, aliases: Vec<String>, quiet: bool) -> Result<()> {
    let tag = library::create_tag(root, name, aliases)?;

    if quiet {
        println!("{}", tag.id);
    } else {
        println!(
            "{} Created tag {} with id {}",
            "✓".green().bold(),
            tag.name.cyan(),
            tag.id.yellow()
        );
    }
    Ok(())
}

/// List all tags in stored order
///
/// # Errors
/// Returns an error if the library is not initialized or cannot be read.
pub fn list(root: &Path, quiet: bool) -> Result<()> {
    let tags = library::list_tags(root)?;

    if tags.is_empty() {
        if !quiet {
            println!("{}", "No tags in library".dimmed());
        }
        return Ok(());
    }

    if !quiet {
        println!("{}", "Tags:".bold());
    }
    for tag in &tags {
        println!("{}", output::tag_line(tag, quiet));
    }
    if !quiet {
        println!();
        println!("{} tags total", tags.len().to_string().bold());
    }
    Ok(())
}

/// Delete a tag, prompting when groups reference it
///
/// Without `--force`, a tag that is a member of one or more groups triggers
/// an interactive confirmation listing the affected groups; declining
/// leaves the library untouched. In quiet mode the confirmation is
/// auto-accepted, matching the behavior of `--force`.
///
/// # Errors
/// Returns an error if the library is not initialized, the save fails, or
/// the confirmation prompt cannot be read.
pub fn delete(root: &Path, tag_id: &str, force: bool, quiet: bool) -> Result<()> {
    match library::delete_tag(root, tag_id, force)? {
        DeleteTagOutcome::Deleted => {
            if !quiet {
                println!("{} Deleted tag {}", "✓".green().bold(), tag_id.yellow());
            }
            Ok(())
        }
        DeleteTagOutcome::NotFound => {
            println!("{} No tag with id {}", "✗".red().bold(), tag_id.yellow());
            Ok(())
        }
        DeleteTagOutcome::ConfirmationRequired(groups) => {
            if !quiet {
                println!(
                    "Tag {} is a member of {} group(s):",
                    tag_id.yellow(),
                    groups.len()
                );
                for group in &groups {
                    println!("  {}  {}", group.id.dimmed(), group.name.yellow());
                }
            }

            let proceed = quiet
                || Confirm::new()
                    .with_prompt("Delete anyway and remove it from these groups?")
                    .default(false)
                    .interact()
                    .map_err(|e| TptagsError::InvalidInput(format!("Failed to read input: {e}")))?;

            if !proceed {
                if !quiet {
                    println!("{}", "Cancelled".dimmed());
                }
                return Ok(());
            }

            // Second call with force applies the cascade.
            match library::delete_tag(root, tag_id, true)? {
                DeleteTagOutcome::Deleted => {
                    if !quiet {
                        println!("{} Deleted tag {}", "✓".green().bold(), tag_id.yellow());
                    }
                    Ok(())
                }
                DeleteTagOutcome::NotFound => {
                    println!("{} No tag with id {}", "✗".red().bold(), tag_id.yellow());
                    Ok(())
                }
                DeleteTagOutcome::ConfirmationRequired(_) => unreachable!(
                    "forced delete_tag never asks for confirmation"
                ),
            }
        }
    }
}
