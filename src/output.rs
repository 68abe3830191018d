//! Output formatting for CLI display

use colored::Colorize;
use std::collections::BTreeSet;
use std::path::Path;

use crate::config::SorterConfig;
use crate::registry::Directory;

/// Format a directory with its tags for display
#[must_use]
pub fn directory_with_tags(directory: &Directory, quiet: bool) -> String {
    let path_str = directory.path().display().to_string();

    if quiet {
        path_str
    } else if directory.is_disabled() {
        format!("  {path_str} (disabled, no tags)")
    } else {
        format!("  {} [{}]", path_str, join_tags(directory.tags()))
    }
}

/// Format a tag with the number of directories using it
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} director{})", if count == 1 { "y" } else { "ies" })
    }
}

/// Color a path based on whether it exists on disk
#[must_use]
pub fn colorize_path(path: &Path) -> String {
    let formatted = path.display().to_string();
    if path.exists() {
        formatted.green().to_string()
    } else {
        formatted.red().to_string()
    }
}

/// One-screen summary of the configuration
#[must_use]
pub fn config_summary(config: &SorterConfig) -> String {
    let mut summary = format!(
        "Watching: {}\nIgnore character: {}\n",
        config.watch_dir.display(),
        config.ignore_char
    );
    if config.ignored_names.is_empty() {
        summary.push_str("Ignored names: (none)\n");
    } else {
        summary.push_str(&format!("Ignored names: {}\n", config.ignored_names.join(", ")));
    }
    summary.push_str(&format!("Managed directories: {}", config.directories.len()));
    summary
}

fn join_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().cloned().collect::<Vec<_>>().join(", ")
}
