mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use walkdir::WalkDir;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Expand command-line paths into the ordered list of files to check.
    ///
    /// Directories are walked and filtered; anything else (including paths that
    /// do not exist) is passed through so the caller can report it. Duplicates
    /// keep their first position.
    ///
    /// # Errors
    /// Returns an error if a directory cannot be walked.
    pub fn resolve(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = IndexSet::new();
        for path in paths {
            if path.is_dir() {
                files.extend(self.scan(path)?);
            } else {
                files.insert(path.clone());
            }
        }
        tracing::debug!(count = files.len(), "resolved input files");
        Ok(files.into_iter().collect())
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"))
            })?;
            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
