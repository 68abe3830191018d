//! Sortr - a tag-based background file sorter
//!
//! This library provides the machinery for routing files into the
//! best-matching folder of a "home" tree. Every managed directory owns a set
//! of lowercase tags; a candidate file is scored against every directory by
//! counting which tags appear as substrings of its filename, and the winner
//! receives the file.
//!
//! The pieces, leaves first:
//!
//! - [`registry`]: the authoritative path -> [`Directory`] mapping
//! - [`engine`]: scoring and best-directory resolution (with a deterministic
//!   tie-break)
//! - [`tree`]: tag propagation down a subtree and inheritance from a parent
//! - [`placement`]: the per-file pipeline that filters, scores and moves
//! - [`watch`]: the filesystem watcher feeding the pipeline
//! - [`config`]: the persisted JSON configuration
//!
//! [`Directory`]: registry::Directory

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod movelog;
pub mod output;
pub mod placement;
pub mod registry;
pub mod tree;
pub mod watch;

#[cfg(test)]
pub mod testing;

use thiserror::Error;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SortrError {
    /// Registry error (lookup, search, inheritance)
    #[error("Registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    /// Scoring error
    #[error("Engine error: {0}")]
    Engine(#[from] engine::EngineError),
    /// Placement error
    #[error("Placement error: {0}")]
    Placement(#[from] placement::PlacementError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    /// Watcher error
    #[error("Watch error: {0}")]
    Watch(#[from] watch::WatchError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, SortrError>;

pub use engine::{Match, best_directory, matching_tag_count};
pub use placement::{PlacementOutcome, Sorter};
pub use registry::{Directory, Registry};
