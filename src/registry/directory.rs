//! The `Directory` entity: one managed folder and the tags it owns.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A filesystem folder participating in sorting.
///
/// The `path` doubles as the entity's identity: it is the key under which the
/// directory is stored in the [`Registry`](crate::registry::Registry) and is
/// never mutated in place. A rename is modeled as removal plus re-insertion
/// under the new path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    path: PathBuf,
    tags: BTreeSet<String>,
}

impl Directory {
    /// Create a directory with the given tags, normalized to lowercase
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, tags: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            path: path.into(),
            tags: tags.normalized(),
        }
    }

    /// The directory's absolute path (its identity)
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The final path segment (the directory's own name, not its ancestors)
    #[must_use]
    pub fn name(&self) -> &str {
        self.path
            .file_name()
            .map_or("", |name| name.to_str().unwrap_or(""))
    }

    /// The directory's tag set
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Whether the directory currently owns any tags
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.tags.is_empty()
    }

    /// Union tags into the tag set. Re-adding an existing tag is a no-op.
    pub fn add_tags(&mut self, tags: impl IntoIterator<Item = impl AsRef<str>>) {
        self.tags.extend(tags.normalized());
    }

    /// Remove a single tag. Returns `true` if the tag was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(&tag.to_lowercase())
    }

    /// Strip all tags, disabling the directory without deleting it
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    pub(crate) fn into_parts(self) -> (PathBuf, BTreeSet<String>) {
        (self.path, self.tags)
    }
}

/// Lowercase normalization applied to every tag entering the system
trait NormalizedTags {
    fn normalized(self) -> BTreeSet<String>;
}

impl<I, S> NormalizedTags for I
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fn normalized(self) -> BTreeSet<String> {
        self.into_iter()
            .map(|tag| tag.as_ref().trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}
