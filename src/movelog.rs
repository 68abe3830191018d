//! Append-only movement log
//!
//! Every successful move is recorded to a log file so files can be found
//! again if they were relocated unexpectedly. Logging is fire-and-forget:
//! nothing in here ever raises into the placement pipeline, a failed write is
//! at worst reported on stderr.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use colored::Colorize;

/// Default name of the movement log, created next to the config file
pub const LOG_FILENAME: &str = "moves.log";

/// Receives one record per successful move
pub trait MoveLog {
    /// Record that the file at `source` now lives at `destination`.
    ///
    /// Must not fail into the caller; implementations swallow their own
    /// errors.
    fn record_move(&mut self, source: &Path, destination: &Path);
}

/// [`MoveLog`] appending timestamped lines to a file, echoing to the console
pub struct FileLog {
    path: PathBuf,
    quiet: bool,
}

impl FileLog {
    /// Log to the file at `path`, echoing to stdout unless `quiet`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, quiet: bool) -> Self {
        Self {
            path: path.into(),
            quiet,
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl MoveLog for FileLog {
    fn record_move(&mut self, source: &Path, destination: &Path) {
        let line = format!(
            "{} {} -> {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            source.display(),
            destination.display()
        );

        if let Err(err) = self.append(&line) {
            eprintln!("Warning: could not write movement log: {err}");
        }

        if !self.quiet {
            println!(
                "Moved {} to {}",
                source.display().to_string().yellow(),
                destination.display().to_string().green()
            );
        }
    }
}

/// [`MoveLog`] that drops every record (tests, dry runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl MoveLog for NullLog {
    fn record_move(&mut self, _source: &Path, _destination: &Path) {}
}
