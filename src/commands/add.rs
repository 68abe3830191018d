//! Add command - register a directory and its tags

use std::path::PathBuf;

use crate::commands::init::canonical_dir;
use crate::registry::Registry;
use crate::tree::{self, FsWalker};
use crate::{Result, SortrError};

/// Execute the add command.
///
/// Registers the directory if it is new, merges the tags if it already is
/// (re-adding is never an error). `recursive` pushes the tags down the whole
/// subtree; `parent_tags` pulls the parent's tags in, and combined with
/// `recursive` pushes those down the subtree too.
///
/// # Errors
/// Returns an error if the directory does not exist on disk, or if
/// `parent_tags` is requested while the parent is not registered.
pub fn execute(
    registry: &mut Registry,
    directory: PathBuf,
    tags: &[String],
    recursive: bool,
    parent_tags: bool,
    quiet: bool,
) -> Result<()> {
    if tags.is_empty() {
        return Err(SortrError::InvalidInput("No tags provided".into()));
    }

    let path = canonical_dir(directory)?;

    if registry.lookup(&path).is_some() {
        registry.merge_tags(&path, tags)?;
    } else {
        registry.register(path.clone(), tags);
    }

    if recursive {
        let tag_set = registry
            .get(&path)
            .map(|dir| dir.tags().clone())?;
        tree::apply_tags_to_subtree(registry, &FsWalker, &path, &tag_set);
    }

    if parent_tags {
        tree::inherit_parent_tags(registry, &FsWalker, &path, recursive)?;
    }

    if !quiet {
        println!("{} registered with: {}", path.display(), tags.join(", "));
    }
    Ok(())
}
