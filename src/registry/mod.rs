//! Directory registry: the authoritative path -> `Directory` mapping
//!
//! The registry is an owned value, constructed by the process and passed by
//! reference into every component that needs it. Nothing in the crate caches
//! its own copy of a `Directory`; all reads and writes go through here, which
//! keeps the invariant that a directory's stored key always equals its
//! `path()` trivially true.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

mod directory;
mod error;

pub use directory::Directory;
pub use error::RegistryError;

use error::Result;

/// The path -> [`Directory`] mapping.
///
/// Backed by a `BTreeMap` so iteration order (and therefore everything
/// derived from a full scan, such as scoring) is deterministic.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    directories: BTreeMap<PathBuf, Directory>,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(path, tags)` entries, as handed over by the
    /// configuration collaborator at startup
    #[must_use]
    pub fn from_entries<P, T, S>(entries: impl IntoIterator<Item = (P, T)>) -> Self
    where
        P: Into<PathBuf>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for (path, tags) in entries {
            registry.register(path, tags);
        }
        registry
    }

    /// Register a directory under `path`.
    ///
    /// Idempotent with respect to the path: if an entity already exists there
    /// it is returned unchanged and the passed tags are ignored. Callers that
    /// want update-on-conflict semantics merge explicitly via
    /// [`merge_tags`](Self::merge_tags).
    pub fn register(
        &mut self,
        path: impl Into<PathBuf>,
        tags: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> &Directory {
        let path = path.into();
        self.directories
            .entry(path.clone())
            .or_insert_with(|| Directory::new(path, tags))
    }

    /// Look up the directory registered at `path`
    #[must_use]
    pub fn lookup(&self, path: impl AsRef<Path>) -> Option<&Directory> {
        self.directories.get(path.as_ref())
    }

    /// Mutable lookup, for tag edits
    pub fn lookup_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut Directory> {
        self.directories.get_mut(path.as_ref())
    }

    /// Like [`lookup`](Self::lookup) but failing with
    /// [`RegistryError::NotFound`] when the path is unknown
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no directory is registered at `path`.
    pub fn get(&self, path: impl AsRef<Path>) -> Result<&Directory> {
        let path = path.as_ref();
        self.lookup(path)
            .ok_or_else(|| RegistryError::NotFound(path.display().to_string()))
    }

    /// Remove the directory registered at `path`, returning it if present.
    ///
    /// Subsequent lookups for `path` report not-found. To disable a directory
    /// while keeping it registered, clear its tags instead.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Directory> {
        self.directories.remove(path.as_ref())
    }

    /// Move a directory entity from `old` to `new`, preserving its tags.
    ///
    /// Paths are identities here, so a filesystem rename is modeled as
    /// removal plus re-insertion; the `path` field of a live entity is never
    /// rewritten in place.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if nothing is registered at `old`.
    pub fn rename(&mut self, old: impl AsRef<Path>, new: impl Into<PathBuf>) -> Result<&Directory> {
        let old = old.as_ref();
        let removed = self
            .remove(old)
            .ok_or_else(|| RegistryError::NotFound(old.display().to_string()))?;
        let (_, tags) = removed.into_parts();
        Ok(self.register(new, tags))
    }

    /// Union `tags` into the tag set of the directory at `path`.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no directory is registered at `path`.
    pub fn merge_tags(
        &mut self,
        path: impl AsRef<Path>,
        tags: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<()> {
        let path = path.as_ref();
        let directory = self
            .lookup_mut(path)
            .ok_or_else(|| RegistryError::NotFound(path.display().to_string()))?;
        directory.add_tags(tags);
        Ok(())
    }

    /// Search registered directories by name.
    ///
    /// Matches `fragment` case-insensitively against the final path segment
    /// only, so `photos` finds `/home/me/photos` but a fragment matching an
    /// ancestor segment does not drag in every descendant. Results come back
    /// ordered by path.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no directory name contains `fragment`.
    pub fn search_by_name(&self, fragment: &str) -> Result<Vec<&Directory>> {
        let fragment = fragment.to_lowercase();
        let matches: Vec<&Directory> = self
            .directories
            .values()
            .filter(|dir| dir.name().to_lowercase().contains(&fragment))
            .collect();

        if matches.is_empty() {
            Err(RegistryError::NotFound(fragment))
        } else {
            Ok(matches)
        }
    }

    /// Iterate all registered directories, ordered by path
    pub fn directories(&self) -> impl Iterator<Item = &Directory> {
        self.directories.values()
    }

    /// Number of registered directories
    #[must_use]
    pub fn len(&self) -> usize {
        self.directories.len()
    }

    /// Whether the registry holds no directories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Export every entry as `(path, tags)` pairs, for the configuration
    /// collaborator to persist at shutdown
    #[must_use]
    pub fn entries(&self) -> Vec<(PathBuf, BTreeSet<String>)> {
        self.directories
            .values()
            .map(|dir| (dir.path().to_path_buf(), dir.tags().clone()))
            .collect()
    }
}
