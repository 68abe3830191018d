//! Testing utilities for sortr
//!
//! Helpers for building throwaway directory trees and candidate files.
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary sandbox directory, removed on drop
///
/// # Panics
/// Panics if the temporary directory cannot be created.
#[must_use]
pub fn sandbox() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a directory (and any missing ancestors) inside a sandbox
///
/// # Panics
/// Panics if creation fails.
pub fn make_dir(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(&path).expect("Failed to create directory");
    path
}

/// Create a small file with throwaway content
///
/// # Panics
/// Panics if the file cannot be created or written.
pub fn make_file(directory: &Path, name: &str) -> PathBuf {
    let path = directory.join(name);
    let mut file = fs::File::create(&path).expect("Failed to create test file");
    file.write_all(b"test content").expect("Failed to write test file");
    path
}
