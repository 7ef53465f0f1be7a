//! Group commands - create, list, and delete tag groups

use colored::Colorize;
use std::path::Path;

use crate::cli::GroupCommands;
use crate::library::{self, DeleteGroupOutcome};
use crate::{TptagsError, output};

type Result<T> = std::result::Result<T, TptagsError>;

/// Execute a tag group subcommand
///
/// # Errors
/// Returns an error if the library is not initialized or a save fails.
pub fn execute(root: &Path, command: &GroupCommands, quiet: bool) -> Result<()> {
    match command {
        GroupCommands::Create {
            name,
            tag_ids,
            aliases,
        } => create(root, name, tag_ids.clone(), aliases.clone(), quiet),
        GroupCommands::List => list(root, quiet),
        GroupCommands::Delete { group_id } => delete(root, group_id, quiet),
    }
}

fn create(
    root: &Path,
    name: &str,
    tag_ids: Vec<String>,
    aliases: Vec<String>,
    quiet: bool,
) -> Result<()> {
    // Member ids are not checked against existing tags; unknown ids are
    // stored as given and pruned only when tags are deleted.
    let unknown: Vec<String> = {
        let tags = library::list_tags(root)?;
        tag_ids
            .iter()
            .filter(|id| !tags.iter().any(|t| &t.id == *id))
            .cloned()
            .collect()
    };

    let group = library::create_tag_group(root, name, tag_ids, aliases)?;

    if quiet {
        println!("{}", group.id);
        return Ok(());
    }

    println!(
        "{} Created group {} with id {} ({} member(s))",
        "✓".green().bold(),
        group.name.yellow(),
        group.id.yellow(),
        group.ids.len()
    );
    if !unknown.is_empty() {
        println!(
            "{} No tag exists for member id(s): {}",
            "⚠".yellow().bold(),
            unknown.join(", ")
        );
    }
    Ok(())
}

fn list(root: &Path, quiet: bool) -> Result<()> {
    let groups = library::list_tag_groups(root)?;

    if groups.is_empty() {
        if !quiet {
            println!("{}", "No tag groups in library".dimmed());
        }
        return Ok(());
    }

    if !quiet {
        println!("{}", "Tag groups:".bold());
    }
    for group in &groups {
        println!("{}", output::group_line(group, quiet));
    }
    if !quiet {
        println!();
        println!("{} groups total", groups.len().to_string().bold());
    }
    Ok(())
}

fn delete(root: &Path, group_id: &str, quiet: bool) -> Result<()> {
    match library::delete_tag_group(root, group_id)? {
        DeleteGroupOutcome::Deleted => {
            if !quiet {
                println!("{} Deleted group {}", "✓".green().bold(), group_id.yellow());
            }
        }
        DeleteGroupOutcome::NotFound => {
            println!("{} No group with id {}", "✗".red().bold(), group_id.yellow());
        }
    }
    Ok(())
}
