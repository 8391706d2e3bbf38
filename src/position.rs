use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A location inside a text: 1-indexed line, 0-indexed character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Offset {offset} is out of range for text of length {len}")]
    OutOfRange { offset: usize, len: usize },

    #[error("Line {line} does not exist (text has {lines} lines)")]
    LineOutOfRange { line: usize, lines: usize },

    #[error("Column {column} exceeds length {len} of line {line}")]
    ColumnOutOfRange {
        line: usize,
        column: usize,
        len: usize,
    },
}

/// Convert a character offset into a [`Position`].
///
/// Valid offsets are `0..=chars(text)`; the offset one past the last character
/// maps to the end of the last line.
///
/// # Errors
/// Returns [`PositionError::OutOfRange`] if `offset` lies beyond the text.
pub fn offset_to_position(text: &str, offset: usize) -> Result<Position, PositionError> {
    let mut line = 1;
    let mut line_start = 0;
    let mut seen = 0;

    for ch in text.chars().take(offset) {
        seen += 1;
        if ch == '\n' {
            line += 1;
            line_start = seen;
        }
    }

    if seen < offset {
        return Err(PositionError::OutOfRange { offset, len: seen });
    }

    Ok(Position::new(line, offset - line_start))
}

/// Convert a [`Position`] back into a character offset.
///
/// A column equal to the line's length addresses the line terminator (or the
/// end of text on the last line).
///
/// # Errors
/// Returns [`PositionError::LineOutOfRange`] if the line does not exist and
/// [`PositionError::ColumnOutOfRange`] if the column is past the end of the line.
pub fn position_to_offset(text: &str, position: Position) -> Result<usize, PositionError> {
    let mut offset = 0;

    for (idx, line_text) in text.split('\n').enumerate() {
        let len = line_text.chars().count();
        if idx + 1 == position.line {
            if position.column > len {
                return Err(PositionError::ColumnOutOfRange {
                    line: position.line,
                    column: position.column,
                    len,
                });
            }
            return Ok(offset + position.column);
        }
        offset += len + 1;
    }

    Err(PositionError::LineOutOfRange {
        line: position.line,
        lines: text.split('\n').count(),
    })
}

/// Position of a byte offset, for callers that slice `text` by bytes.
///
/// # Errors
/// Returns [`PositionError::OutOfRange`] if `byte` is past the end of `text` or
/// does not fall on a character boundary.
pub fn byte_to_position(text: &str, byte: usize) -> Result<Position, PositionError> {
    let prefix = text.get(..byte).ok_or(PositionError::OutOfRange {
        offset: byte,
        len: text.len(),
    })?;
    offset_to_position(text, prefix.chars().count())
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
