//! Display and search commands - inspect the registry and configuration

use std::collections::BTreeMap;

use crate::cli::DisplayVariant;
use crate::config::SorterConfig;
use crate::output;
use crate::registry::Registry;
use crate::Result;

/// Execute the display command
pub fn display(
    registry: &Registry,
    config: &SorterConfig,
    selection: DisplayVariant,
    quiet: bool,
) {
    match selection {
        DisplayVariant::Tags => display_tags(registry, quiet),
        DisplayVariant::Dirs => display_dirs(registry, quiet),
        DisplayVariant::Config => println!("{}", output::config_summary(config)),
    }
}

fn display_tags(registry: &Registry, quiet: bool) {
    let mut usage: BTreeMap<&str, usize> = BTreeMap::new();
    for directory in registry.directories() {
        for tag in directory.tags() {
            *usage.entry(tag.as_str()).or_default() += 1;
        }
    }

    if usage.is_empty() {
        if !quiet {
            println!("No tags in use.");
        }
        return;
    }

    if !quiet {
        println!("Tags in use:");
    }
    for (tag, count) in usage {
        println!("{}", output::tag_with_count(tag, count, quiet));
    }
}

fn display_dirs(registry: &Registry, quiet: bool) {
    if registry.is_empty() {
        if !quiet {
            println!("No directories registered.");
        }
        return;
    }

    if !quiet {
        println!("Managed directories:");
    }
    for directory in registry.directories() {
        println!("{}", output::directory_with_tags(directory, quiet));
    }
}

/// Execute the search command - find directories by name fragment
///
/// # Errors
/// Returns `RegistryError::NotFound` if nothing matches.
pub fn search(registry: &Registry, name: &str, quiet: bool) -> Result<()> {
    let matches = registry.search_by_name(name)?;

    if !quiet {
        println!("{} match(es) for '{name}':", matches.len());
    }
    for (index, directory) in matches.iter().enumerate() {
        println!("{} - {}", index + 1, output::colorize_path(directory.path()));
    }
    Ok(())
}
