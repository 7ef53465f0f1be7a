//! Output formatting for CLI display
//!
//! Human-facing lines are colored; quiet mode emits tab-separated fields
//! suitable for scripting.

use colored::Colorize;

use crate::library::{Tag, TagGroup};

/// Format a tag for display
#[must_use]
pub fn tag_line(tag: &Tag, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", tag.id, tag.name);
    }

    if tag.aliases.is_empty() {
        format!("  {}  {}", tag.id.dimmed(), tag.name.cyan())
    } else {
        format!(
            "  {}  {} ({})",
            tag.id.dimmed(),
            tag.name.cyan(),
            tag.aliases.join(", ").dimmed()
        )
    }
}

/// Format a tag group for display
#[must_use]
pub fn group_line(group: &TagGroup, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}\t{}", group.id, group.name, group.ids.join(","));
    }

    let members = if group.ids.is_empty() {
        "empty".dimmed().to_string()
    } else {
        format!("{} tag(s): {}", group.ids.len(), group.ids.join(", "))
    };
    format!(
        "  {}  {} [{}]",
        group.id.dimmed(),
        group.name.yellow(),
        members
    )
}
