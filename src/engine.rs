//! Tag engine: scores filenames against the registry and picks a winner
//!
//! Matching is keyword-style and deliberately fuzzy: a tag counts whenever it
//! appears as a substring of the lowercased filename, with no regard for word
//! boundaries. `"cat"` matches `concatenate.txt`. Tags are matched
//! independently, so a filename can hit any number of a directory's tags.
//!
//! When several directories share the maximal count the engine prefers the
//! one highest up the tree (fewest path components), then the
//! lexicographically smallest path. Evidence being equally weak everywhere,
//! coarse catch-all placement beats an arbitrary deep nest, and the policy
//! makes the outcome reproducible.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::registry::{Directory, Registry};

/// Scoring errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Scoring was attempted against an empty registry
    #[error("No directories are registered; nothing to sort into")]
    NoDirectoriesRegistered,
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, EngineError>;

/// Outcome of scoring a filename against the whole registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Path of the winning directory
    pub path: PathBuf,
    /// Number of the winner's tags found in the filename. Zero is a valid
    /// outcome and means "no evidence"; callers treat it as do-not-move.
    pub count: usize,
}

/// Count how many of `directory`'s tags occur in `filename`.
///
/// The filename is lowercased once; tags are already stored lowercase.
#[must_use]
pub fn matching_tag_count(directory: &Directory, filename: &str) -> usize {
    let filename = filename.to_lowercase();
    directory
        .tags()
        .iter()
        .filter(|tag| filename.contains(tag.as_str()))
        .count()
}

/// Score `filename` against every registered directory and return the best.
///
/// Deterministic for a fixed registry state: the same filename always
/// resolves to the same directory.
///
/// # Errors
/// Returns [`EngineError::NoDirectoriesRegistered`] if the registry is empty.
pub fn best_directory(registry: &Registry, filename: &str) -> Result<Match> {
    let mut best: Option<(&Directory, usize)> = None;

    for directory in registry.directories() {
        let count = matching_tag_count(directory, filename);
        let better = match best {
            None => true,
            Some((incumbent, best_count)) => match count.cmp(&best_count) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => prefer_shallower(directory.path(), incumbent.path()),
            },
        };
        if better {
            best = Some((directory, count));
        }
    }

    best.map(|(directory, count)| Match {
        path: directory.path().to_path_buf(),
        count,
    })
    .ok_or(EngineError::NoDirectoriesRegistered)
}

/// Tie-break: fewer path components wins; equal depth falls back to the
/// lexicographically smaller path.
fn prefer_shallower(candidate: &Path, incumbent: &Path) -> bool {
    let candidate_depth = candidate.components().count();
    let incumbent_depth = incumbent.components().count();
    match candidate_depth.cmp(&incumbent_depth) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => candidate < incumbent,
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
