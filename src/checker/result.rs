use std::path::{Path, PathBuf};

use crate::error::DocstringGuardError;
use crate::rules::Violation;

/// What happened to one input file.
#[derive(Debug)]
pub enum FileOutcome {
    Checked(Vec<Violation>),
    Failed(DocstringGuardError),
}

/// Result of checking a single file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    #[must_use]
    pub fn checked(path: &Path, violations: Vec<Violation>) -> Self {
        Self {
            path: path.to_path_buf(),
            outcome: FileOutcome::Checked(violations),
        }
    }

    #[must_use]
    pub fn failed(path: &Path, error: DocstringGuardError) -> Self {
        Self {
            path: path.to_path_buf(),
            outcome: FileOutcome::Failed(error),
        }
    }

    /// Violations found; empty when the file could not be checked.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match &self.outcome {
            FileOutcome::Checked(violations) => violations,
            FileOutcome::Failed(_) => &[],
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&DocstringGuardError> {
        match &self.outcome {
            FileOutcome::Checked(_) => None,
            FileOutcome::Failed(error) => Some(error),
        }
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations().is_empty()
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed(_))
    }
}
