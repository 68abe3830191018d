//! Placement orchestrator: the per-file filter -> score -> move pipeline
//!
//! One call to [`Sorter::sort_file`] handles one discovered file. The
//! pipeline is a pure read of tag state followed by a single external side
//! effect (the move), so a failed move leaves the registry untouched and the
//! file at its source.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::{self, EngineError};
use crate::movelog::MoveLog;
use crate::registry::Registry;

mod mover;

pub use mover::{FileMover, FsMover};

/// Placement errors
#[derive(Debug, Error)]
pub enum PlacementError {
    /// The underlying move failed; the file remains at its source
    #[error("Failed to move file: {0}")]
    Io(#[from] io::Error),

    /// Scoring failed (empty registry)
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The candidate path has no usable filename component
    #[error("Path has no filename: {0}")]
    NoFilename(PathBuf),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, PlacementError>;

/// What happened to one candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The path carried the ignore sentinel or an ignored name; never scored
    Ignored,
    /// The best directory matched zero tags; the file stays put
    NoMatch,
    /// The file was relocated
    Moved { from: PathBuf, to: PathBuf },
}

/// The placement pipeline, configured once per run.
///
/// Holds the ignore rules and the move/log collaborators; the registry is
/// passed per call because other components mutate it between events.
pub struct Sorter {
    ignore_char: char,
    ignored_names: Vec<String>,
    mover: Box<dyn FileMover>,
    log: Box<dyn MoveLog>,
}

impl Sorter {
    /// Build a sorter that moves files on the real filesystem
    #[must_use]
    pub fn new(
        ignore_char: char,
        ignored_names: Vec<String>,
        log: Box<dyn MoveLog>,
    ) -> Self {
        Self::with_mover(ignore_char, ignored_names, Box::new(FsMover), log)
    }

    /// Build a sorter with a custom move primitive (tests, dry runs)
    #[must_use]
    pub fn with_mover(
        ignore_char: char,
        ignored_names: Vec<String>,
        mover: Box<dyn FileMover>,
        log: Box<dyn MoveLog>,
    ) -> Self {
        Self {
            ignore_char,
            ignored_names,
            mover,
            log,
        }
    }

    /// Sort one discovered file into its best-matching directory.
    ///
    /// Filter, score, decide, collision-resolve, move. Files carrying the
    /// ignore sentinel never reach the tag engine; a zero-count winner means
    /// the file stays put.
    ///
    /// # Errors
    /// Returns [`PlacementError::Engine`] when the registry is empty and
    /// [`PlacementError::Io`] when the physical move fails. Neither corrupts
    /// any tag state.
    pub fn sort_file(&mut self, registry: &Registry, path: &Path) -> Result<PlacementOutcome> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PlacementError::NoFilename(path.to_path_buf()))?;

        if self.is_ignored(path, filename) {
            return Ok(PlacementOutcome::Ignored);
        }

        let best = engine::best_directory(registry, filename)?;
        if best.count == 0 {
            return Ok(PlacementOutcome::NoMatch);
        }

        let destination = self.resolve_collision(&best.path, filename);
        self.mover.move_file(path, &destination)?;
        self.log.record_move(path, &destination);

        Ok(PlacementOutcome::Moved {
            from: path.to_path_buf(),
            to: destination,
        })
    }

    /// Ignore-sentinel and ignored-name short-circuit.
    ///
    /// The sentinel is checked against the whole path, ignored names against
    /// the filename only.
    fn is_ignored(&self, path: &Path, filename: &str) -> bool {
        if path.to_string_lossy().contains(self.ignore_char) {
            return true;
        }
        self.ignored_names
            .iter()
            .any(|name| filename.contains(name.as_str()))
    }

    /// First free destination path inside `directory` for `filename`.
    ///
    /// While occupied, tries `"stem (n).ext"` with n = 1, 2, ... The counter
    /// is unbounded; exhaustion is not a reachable state.
    fn resolve_collision(&self, directory: &Path, filename: &str) -> PathBuf {
        let candidate = directory.join(filename);
        if !self.mover.exists(&candidate) {
            return candidate;
        }

        let stem = Path::new(filename)
            .file_stem()
            .map_or_else(|| filename.to_string(), |s| s.to_string_lossy().into_owned());
        let extension = Path::new(filename)
            .extension()
            .map(|e| e.to_string_lossy().into_owned());

        let mut counter = 1u64;
        loop {
            let numbered = match &extension {
                Some(ext) => format!("{stem} ({counter}).{ext}"),
                None => format!("{stem} ({counter})"),
            };
            let candidate = directory.join(numbered);
            if !self.mover.exists(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}
