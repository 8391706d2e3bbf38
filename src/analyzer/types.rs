/// The keyword that opened a definition block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Function,
    Class,
}

/// A definition's header plus body, as a byte range into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: DefinitionKind,
    /// Defined name
    pub name: String,
    /// Byte offset of the defining keyword (inclusive)
    pub start: usize,
    /// Byte offset where the block stops (exclusive)
    pub end: usize,
    /// Column at which the defining keyword begins
    pub indent: usize,
}

impl Block {
    /// The block's slice of the text it was segmented from.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// The same block with its range shifted by `base` bytes.
    #[must_use]
    pub fn offset_by(mut self, base: usize) -> Self {
        self.start += base;
        self.end += base;
        self
    }
}

/// String prefix letters that matter to docstring checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringPrefix {
    #[default]
    None,
    Raw,
    Unicode,
    RawUnicode,
}

impl StringPrefix {
    /// Classify prefix letters (`u`, `r`, `ur`, `ru`, any case).
    ///
    /// Returns `None` for anything else, including repeated letters.
    #[must_use]
    pub fn from_letters(letters: &str) -> Option<Self> {
        let mut raw = false;
        let mut unicode = false;
        for ch in letters.chars() {
            let seen = match ch.to_ascii_lowercase() {
                'r' => &mut raw,
                'u' => &mut unicode,
                _ => return None,
            };
            if *seen {
                return None;
            }
            *seen = true;
        }

        Some(match (raw, unicode) {
            (false, false) => Self::None,
            (true, false) => Self::Raw,
            (false, true) => Self::Unicode,
            (true, true) => Self::RawUnicode,
        })
    }

    #[must_use]
    pub const fn is_raw(self) -> bool {
        matches!(self, Self::Raw | Self::RawUnicode)
    }

    #[must_use]
    pub const fn is_unicode(self) -> bool {
        matches!(self, Self::Unicode | Self::RawUnicode)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    TripleDouble,
    TripleSingle,
    /// Single-character delimiters or anything unrecognised.
    Other,
}

impl QuoteStyle {
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::TripleDouble => "\"\"\"",
            Self::TripleSingle => "'''",
            Self::Other => "",
        }
    }
}

/// A string literal found as the first statement of a module or block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocstringLiteral<'a> {
    /// Literal source text, prefix and delimiters included
    pub raw: &'a str,
    /// Byte offset of `raw` in the text it was extracted from
    pub offset: usize,
    pub prefix: StringPrefix,
    pub quote: QuoteStyle,
}

impl DocstringLiteral<'_> {
    /// Byte offset just past the closing delimiter.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.raw.len()
    }
}
