mod docstring;
mod lexer;
mod segment;
mod types;

pub use docstring::{LiteralParts, extract_docstring, extract_module_docstring};
pub use lexer::{LineKind, SourceLine, indent_width, scan_lines};
pub use segment::{BlockSegmenter, segment_classes, segment_methods, segment_top_level};
pub use types::{Block, DefinitionKind, DocstringLiteral, QuoteStyle, StringPrefix};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
