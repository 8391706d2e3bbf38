mod result;

pub use result::{FileOutcome, FileReport};

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analyzer::{
    Block, extract_docstring, extract_module_docstring, segment_classes, segment_methods,
    segment_top_level,
};
use crate::error::{DocstringGuardError, Result};
use crate::position::{Position, byte_to_position};
use crate::rules::{RuleContext, RuleEngine, Violation};

pub trait Checker {
    /// Check every docstring in one file's source.
    fn check_source(&self, source: &str) -> Vec<Violation>;

    /// Read a file and check it. Open and read failures are captured in the
    /// report instead of being returned.
    fn check_path(&self, path: &Path) -> FileReport;
}

/// Runs the rule engine over the module, function, class and method
/// docstrings of a file.
#[derive(Default)]
pub struct DocstringChecker {
    engine: RuleEngine,
}

impl DocstringChecker {
    #[must_use]
    pub const fn new(engine: RuleEngine) -> Self {
        Self { engine }
    }

    #[must_use]
    pub const fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Check files in parallel; reports keep the order of `paths`.
    #[must_use]
    pub fn check_files(&self, paths: &[PathBuf]) -> Vec<FileReport> {
        paths.par_iter().map(|path| self.check_path(path)).collect()
    }
}

/// Function, class and method blocks of a file, ordered by start offset.
fn definition_blocks(source: &str) -> Vec<Block> {
    let mut blocks = segment_top_level(source);
    for class in segment_classes(source) {
        let methods = segment_methods(class.text(source))
            .into_iter()
            .map(|method| method.offset_by(class.start));
        blocks.extend(methods);
        blocks.push(class);
    }
    blocks.sort_by_key(|block| block.start);
    blocks
}

fn docstring_span(source: &str, start: usize, end: usize) -> Option<(Position, Position)> {
    let start = byte_to_position(source, start).ok()?;
    let end = byte_to_position(source, end).ok()?;
    Some((start, end))
}

fn read_source(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| DocstringGuardError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut source = String::new();
    file.read_to_string(&mut source)
        .map_err(|source| DocstringGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(source)
}

impl Checker for DocstringChecker {
    fn check_source(&self, source: &str) -> Vec<Violation> {
        let is_script = source.starts_with("#!");
        let mut violations = Vec::new();

        if let Some(docstring) = extract_module_docstring(source) {
            let ctx = RuleContext::new(docstring.raw, None, is_script);
            violations.extend(self.engine.evaluate(&ctx, None));
        }

        let blocks = definition_blocks(source);
        for block in &blocks {
            let text = block.text(source);
            let Some(docstring) = extract_docstring(text) else {
                continue;
            };

            let span = docstring_span(
                source,
                block.start + docstring.offset,
                block.start + docstring.end(),
            );
            let ctx = RuleContext::new(docstring.raw, Some(text), is_script)
                .with_offset(docstring.offset);
            violations.extend(self.engine.evaluate(&ctx, span));
        }

        tracing::trace!(
            blocks = blocks.len(),
            violations = violations.len(),
            is_script,
            "checked source"
        );
        violations
    }

    fn check_path(&self, path: &Path) -> FileReport {
        match read_source(path) {
            Ok(source) => {
                let violations = self.check_source(&source);
                tracing::debug!(path = %path.display(), violations = violations.len(), "checked file");
                FileReport::checked(path, violations)
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), error = %error, "could not check file");
                FileReport::failed(path, error)
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
