//! The physical move primitive behind the placement pipeline

use std::fs;
use std::io;
use std::path::Path;

/// Relocates a file on disk.
///
/// Placement treats the actual move as an external primitive behind this
/// trait so the decision pipeline can be exercised without touching a real
/// filesystem.
pub trait FileMover {
    /// Move the file at `source` to `destination`.
    ///
    /// # Errors
    /// Returns an `io::Error` if the move fails (permissions, missing source,
    /// cross-device rename). The source file must be left in place on failure.
    fn move_file(&self, source: &Path, destination: &Path) -> io::Result<()>;

    /// Whether a file already occupies `path`, used for collision probing
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileMover`] backed by `std::fs::rename`.
///
/// No cross-volume fallback: a rename across devices surfaces the error to
/// the caller and the file stays where it is.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMover;

impl FileMover for FsMover {
    fn move_file(&self, source: &Path, destination: &Path) -> io::Result<()> {
        fs::rename(source, destination)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
