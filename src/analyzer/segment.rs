use std::sync::LazyLock;

use regex::Regex;

use super::lexer::{SourceLine, scan_lines};
use super::types::{Block, DefinitionKind};

/// Recovers definition blocks from Python source by indentation tracking.
pub struct BlockSegmenter {
    def_pattern: Regex,
    class_pattern: Regex,
}

impl Default for BlockSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

static SEGMENTER: LazyLock<BlockSegmenter> = LazyLock::new(BlockSegmenter::new);

impl BlockSegmenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            def_pattern: Regex::new(r"^(?:async[\t ]+)?def[\t ]+(\w+)").expect("Invalid regex"),
            class_pattern: Regex::new(r"^class[\t ]+(\w+)").expect("Invalid regex"),
        }
    }

    /// Function definitions starting at column 0.
    #[must_use]
    pub fn top_level(&self, source: &str) -> Vec<Block> {
        let lines = scan_lines(source);
        self.collect(source, &lines, DefinitionKind::Function, 0)
    }

    /// Class definitions starting at column 0.
    #[must_use]
    pub fn classes(&self, source: &str) -> Vec<Block> {
        let lines = scan_lines(source);
        self.collect(source, &lines, DefinitionKind::Class, 0)
    }

    /// Methods directly inside a class block.
    ///
    /// The baseline is the class body's indentation, taken from the first
    /// statement deeper than the header. Only definitions at exactly that
    /// column start blocks.
    #[must_use]
    pub fn methods(&self, class_text: &str) -> Vec<Block> {
        let lines = scan_lines(class_text);
        let Some(header) = lines.iter().find(|l| l.starts_statement()) else {
            return Vec::new();
        };

        let baseline = lines
            .iter()
            .find(|l| l.starts_statement() && l.indent > header.indent)
            .map(|l| l.indent);

        baseline.map_or_else(Vec::new, |baseline| {
            self.collect(class_text, &lines, DefinitionKind::Function, baseline)
        })
    }

    fn definition_name(&self, kind: DefinitionKind, line: &SourceLine<'_>) -> Option<String> {
        let pattern = match kind {
            DefinitionKind::Function => &self.def_pattern,
            DefinitionKind::Class => &self.class_pattern,
        };
        pattern
            .captures(&line.text[line.indent..])
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn collect(
        &self,
        source: &str,
        lines: &[SourceLine<'_>],
        kind: DefinitionKind,
        baseline: usize,
    ) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut idx = 0;

        while idx < lines.len() {
            let line = &lines[idx];
            let name = if line.starts_statement() && line.indent == baseline {
                self.definition_name(kind, line)
            } else {
                None
            };

            let Some(name) = name else {
                idx += 1;
                continue;
            };

            let end_idx = find_block_end(lines, idx, baseline);
            let end = lines
                .get(end_idx)
                .map_or(source.len(), SourceLine::content_start);

            blocks.push(Block {
                kind,
                name,
                start: line.content_start(),
                end,
                indent: baseline,
            });
            idx = end_idx;
        }

        blocks
    }
}

/// Index of the first line that starts a statement at or left of `base_indent`,
/// or `lines.len()` if the block runs to the end of the text.
fn find_block_end(lines: &[SourceLine<'_>], start: usize, base_indent: usize) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, line)| line.starts_statement() && line.indent <= base_indent)
        .map_or(lines.len(), |(i, _)| i)
}

/// Top-level function blocks of `source`, in source order.
#[must_use]
pub fn segment_top_level(source: &str) -> Vec<Block> {
    SEGMENTER.top_level(source)
}

/// Top-level class blocks of `source`, in source order.
#[must_use]
pub fn segment_classes(source: &str) -> Vec<Block> {
    SEGMENTER.classes(source)
}

/// Method blocks of a class block; ranges are relative to `class_text`.
#[must_use]
pub fn segment_methods(class_text: &str) -> Vec<Block> {
    SEGMENTER.methods(class_text)
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
