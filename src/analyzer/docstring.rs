use super::lexer::{LineKind, ScanState, physical_lines, scan_lines};
use super::types::{DocstringLiteral, QuoteStyle, StringPrefix};

/// Docstring of a definition block: a triple-quoted literal that is the first
/// statement of the block body.
///
/// One-line definitions (`def f(): pass`) and bodies whose first statement is
/// anything else yield `None`.
#[must_use]
pub fn extract_docstring(block_text: &str) -> Option<DocstringLiteral<'_>> {
    let body_start = header_end(block_text)?;
    first_statement_literal(block_text, body_start)
}

/// Docstring of a module: a triple-quoted literal that is the first statement
/// of the file. Comments (including `#!` and coding lines) are skipped.
#[must_use]
pub fn extract_module_docstring(source: &str) -> Option<DocstringLiteral<'_>> {
    first_statement_literal(source, 0)
}

/// Byte offset of the line after the header's closing `:`.
fn header_end(text: &str) -> Option<usize> {
    let mut state = ScanState::default();

    for (start, line) in physical_lines(text) {
        let Some(colon) = state.feed(line, |_, ch, depth| ch == ':' && depth == 0) else {
            continue;
        };

        let rest = line[colon + 1..].trim();
        if !rest.is_empty() && !rest.starts_with('#') {
            return None;
        }
        return Some(text[start..].find('\n').map_or(text.len(), |i| start + i + 1));
    }

    None
}

fn first_statement_literal(text: &str, from: usize) -> Option<DocstringLiteral<'_>> {
    let statement = scan_lines(&text[from..])
        .into_iter()
        .find(|line| !matches!(line.kind, LineKind::Blank | LineKind::Comment))?;
    literal_at(text, from + statement.content_start())
}

/// Parse a triple-quoted literal starting exactly at `offset`.
fn literal_at(text: &str, offset: usize) -> Option<DocstringLiteral<'_>> {
    let tail = &text[offset..];
    let letters_len = tail
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(tail.len());
    if letters_len > 2 {
        return None;
    }
    let prefix = StringPrefix::from_letters(&tail[..letters_len])?;

    let after_prefix = &tail[letters_len..];
    let quote = if after_prefix.starts_with("\"\"\"") {
        QuoteStyle::TripleDouble
    } else if after_prefix.starts_with("'''") {
        QuoteStyle::TripleSingle
    } else {
        return None;
    };

    let delimiter = quote.delimiter();
    let close = closing_end(&after_prefix[delimiter.len()..], delimiter)?;
    let len = letters_len + delimiter.len() + close;

    Some(DocstringLiteral {
        raw: &tail[..len],
        offset,
        prefix,
        quote,
    })
}

/// Byte length up to and including the first unescaped `delimiter`.
fn closing_end(body: &str, delimiter: &str) -> Option<usize> {
    let mut chars = body.char_indices();
    while let Some((idx, ch)) = chars.next() {
        if ch == '\\' {
            chars.next();
        } else if body[idx..].starts_with(delimiter) {
            return Some(idx + delimiter.len());
        }
    }
    None
}

/// The pieces of a literal's source text, as seen by rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralParts<'a> {
    pub prefix: StringPrefix,
    pub quote: QuoteStyle,
    /// Text between the delimiters
    pub content: &'a str,
}

impl<'a> LiteralParts<'a> {
    /// Split arbitrary literal source into prefix, quote style and content.
    ///
    /// Unrecognised prefixes are treated as no prefix; unrecognised delimiters
    /// give [`QuoteStyle::Other`].
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let letters_len = raw
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(raw.len());
        let prefix = StringPrefix::from_letters(&raw[..letters_len]).unwrap_or_default();
        let rest = &raw[letters_len..];

        let (quote, delimiter) = if rest.starts_with("\"\"\"") {
            (QuoteStyle::TripleDouble, "\"\"\"")
        } else if rest.starts_with("'''") {
            (QuoteStyle::TripleSingle, "'''")
        } else if rest.starts_with('"') {
            (QuoteStyle::Other, "\"")
        } else if rest.starts_with('\'') {
            (QuoteStyle::Other, "'")
        } else {
            (QuoteStyle::Other, "")
        };

        let inner = &rest[delimiter.len()..];
        let content = if delimiter.is_empty() {
            inner
        } else {
            inner.strip_suffix(delimiter).unwrap_or(inner)
        };

        Self {
            prefix,
            quote,
            content,
        }
    }

    /// Content split on `\n`.
    #[must_use]
    pub fn lines(&self) -> Vec<&'a str> {
        self.content.split('\n').collect()
    }

    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.content.contains('\n')
    }
}

#[cfg(test)]
#[path = "docstring_tests.rs"]
mod tests;
