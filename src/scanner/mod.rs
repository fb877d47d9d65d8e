//! File discovery: turns command-line paths into an ordered list of sources.

mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CodingStyleError, Result};
use crate::source::SourceInput;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Whether a file named directly, rather than found by `scan`, is kept.
    fn accepts_named(&self, _path: &Path) -> bool {
        true
    }
}

/// Expand `paths` into the files to verify, sorted and without duplicates.
///
/// Directories are walked with `scanner`. Files named explicitly are kept
/// even when their extension is not in the filter, but exclude patterns
/// still apply to them.
///
/// # Errors
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn collect_files<S: FileScanner>(scanner: &S, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = scanner.scan(path)?;
            debug!(root = %path.display(), files = found.len(), "scanned directory");
            files.extend(found);
        } else if path.is_file() {
            if scanner.accepts_named(path) {
                files.push(path.clone());
            } else {
                debug!(path = %path.display(), "named file excluded");
            }
        } else {
            return Err(CodingStyleError::FileRead {
                path: path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            });
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Read every file into memory, keeping the given order.
///
/// # Errors
/// Returns an error if any file cannot be read.
pub fn read_sources(files: &[PathBuf]) -> Result<Vec<SourceInput>> {
    files
        .iter()
        .map(|path| {
            std::fs::read(path)
                .map(|content| SourceInput::new(path.clone(), content))
                .map_err(|source| CodingStyleError::FileRead {
                    path: path.clone(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
