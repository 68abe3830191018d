//! Rename command - move a registered directory to a new path

use std::path::PathBuf;

use crate::registry::Registry;
use crate::Result;

/// Execute the rename command.
///
/// The registry models a rename as removal plus re-registration under the
/// new path with the same tags; this command exposes that operation for when
/// a managed directory has been moved on disk.
///
/// # Errors
/// Returns `RegistryError::NotFound` if the old path is not registered.
pub fn execute(registry: &mut Registry, old: &PathBuf, new: PathBuf, quiet: bool) -> Result<()> {
    let renamed = registry.rename(old, new)?;

    if !quiet {
        println!("{} is now registered at {}", old.display(), renamed.path().display());
    }
    Ok(())
}
