//! Remove commands - drop directories or strip tags

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::Confirm;

use crate::registry::Registry;
use crate::{Result, SortrError};

/// Execute the remove-dir command.
///
/// Deletes each directory entity from the registry after confirmation.
/// Unknown paths are reported and skipped rather than aborting the batch.
///
/// # Errors
/// Returns an error only if the confirmation prompt itself fails.
pub fn remove_dir(
    registry: &mut Registry,
    directories: &[PathBuf],
    yes: bool,
    quiet: bool,
) -> Result<()> {
    for path in directories {
        if registry.lookup(path).is_none() {
            if !quiet {
                eprintln!("{} is not registered, skipping", path.display());
            }
            continue;
        }

        if !yes && !quiet {
            let confirmed = Confirm::new()
                .with_prompt(format!("Remove {} from the registry?", path.display()))
                .default(false)
                .interact()
                .map_err(|e| SortrError::InvalidInput(e.to_string()))?;
            if !confirmed {
                continue;
            }
        }

        registry.remove(path);
        if !quiet {
            println!("Removed {}", path.display().to_string().red());
        }
    }
    Ok(())
}

/// Execute the remove-tag command.
///
/// With no directories given the tag is stripped everywhere; otherwise only
/// from the named directories. A directory stripped of its last tag stays
/// registered, just disabled.
///
/// # Errors
/// Returns `RegistryError::NotFound` if a named directory is not registered.
pub fn remove_tag(
    registry: &mut Registry,
    tag: &str,
    directories: &[PathBuf],
    quiet: bool,
) -> Result<()> {
    let mut removed_from = 0usize;

    if directories.is_empty() {
        let paths: Vec<PathBuf> = registry
            .directories()
            .map(|dir| dir.path().to_path_buf())
            .collect();
        for path in paths {
            if let Some(dir) = registry.lookup_mut(&path)
                && dir.remove_tag(tag)
            {
                removed_from += 1;
            }
        }
    } else {
        for path in directories {
            registry.get(path)?;
            if let Some(dir) = registry.lookup_mut(path)
                && dir.remove_tag(tag)
            {
                removed_from += 1;
            }
        }
    }

    if !quiet {
        println!("Removed '{tag}' from {removed_from} director{}", if removed_from == 1 { "y" } else { "ies" });
    }
    Ok(())
}
