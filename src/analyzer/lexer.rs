/// Classification of a physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// Only a `#` comment after optional whitespace.
    Comment,
    /// Starts a new logical line.
    Code,
    /// Starts inside an open string, bracket or after a trailing backslash.
    Continuation,
}

/// A physical line of source with its byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Byte offset of the first character of the line.
    pub start: usize,
    /// Line text without its terminator.
    pub text: &'a str,
    /// Number of leading space/tab characters.
    pub indent: usize,
    pub kind: LineKind,
}

impl SourceLine<'_> {
    /// Byte offset of the first non-whitespace character.
    #[must_use]
    pub const fn content_start(&self) -> usize {
        self.start + self.indent
    }

    #[must_use]
    pub const fn starts_statement(&self) -> bool {
        matches!(self.kind, LineKind::Code)
    }
}

#[must_use]
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

const fn triple(quote: char) -> &'static str {
    if quote == '"' { "\"\"\"" } else { "'''" }
}

/// Cross-line lexical state: open triple-quoted string, bracket depth, and
/// explicit backslash continuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanState {
    depth: usize,
    open_triple: Option<char>,
    continued: bool,
}

impl ScanState {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.depth > 0 || self.open_triple.is_some() || self.continued
    }

    /// Advance over one physical line (without terminator).
    ///
    /// `visit` receives every code character outside strings and comments
    /// together with the bracket depth before that character. Scanning stops at
    /// the first character for which `visit` returns `true`, and its byte
    /// index is returned.
    pub fn feed(
        &mut self,
        line: &str,
        mut visit: impl FnMut(usize, char, usize) -> bool,
    ) -> Option<usize> {
        self.continued = false;
        let mut chars = line.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if let Some(quote) = self.open_triple {
                if ch == '\\' {
                    chars.next();
                } else if ch == quote && line[idx..].starts_with(triple(quote)) {
                    chars.next();
                    chars.next();
                    self.open_triple = None;
                }
                continue;
            }

            if visit(idx, ch, self.depth) {
                return Some(idx);
            }

            match ch {
                '#' => break,
                '"' | '\'' if line[idx..].starts_with(triple(ch)) => {
                    chars.next();
                    chars.next();
                    self.open_triple = Some(ch);
                }
                '"' | '\'' => {
                    // Single-quoted strings end on their own line.
                    while let Some((_, inner)) = chars.next() {
                        if inner == '\\' {
                            chars.next();
                        } else if inner == ch {
                            break;
                        }
                    }
                }
                '\\' if chars.peek().is_none() => self.continued = true,
                '(' | '[' | '{' => self.depth += 1,
                ')' | ']' | '}' => self.depth = self.depth.saturating_sub(1),
                _ => {}
            }
        }

        None
    }
}

/// Iterate physical lines with their byte start, stripping `\n` and `\r\n`.
pub fn physical_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some((start, line))
    })
}

/// Split `text` into classified physical lines.
#[must_use]
pub fn scan_lines(text: &str) -> Vec<SourceLine<'_>> {
    let mut state = ScanState::default();

    physical_lines(text)
        .map(|(start, line)| {
            let trimmed = line.trim_start_matches([' ', '\t']);
            let kind = if state.is_open() {
                LineKind::Continuation
            } else if trimmed.trim().is_empty() {
                LineKind::Blank
            } else if trimmed.starts_with('#') {
                LineKind::Comment
            } else {
                LineKind::Code
            };
            state.feed(line, |_, _, _| false);

            SourceLine {
                start,
                text: line,
                indent: indent_width(line),
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
