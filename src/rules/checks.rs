use crate::analyzer::{LiteralParts, QuoteStyle, indent_width};

use super::{Rule, RuleContext};

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_whitespace(line: &str) -> &str {
    &line[..indent_width(line)]
}

fn is_class_context(context: &str) -> bool {
    context
        .trim_start()
        .strip_prefix("class")
        .is_some_and(|rest| rest.starts_with([' ', '\t']))
}

/// The fixed rule set, in reporting order.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(TripleDoubleQuotes),
        Box::new(Backslashes),
        Box::new(UnicodeDocstring),
        Box::new(EndsWithPeriod),
        Box::new(BlankBeforeAfterClass),
        Box::new(BlankAfterSummary),
        Box::new(Indent),
        Box::new(BlankAfterLastParagraph),
    ]
}

pub struct TripleDoubleQuotes;

impl Rule for TripleDoubleQuotes {
    fn id(&self) -> &'static str {
        "triple-double-quotes"
    }

    fn message(&self) -> &'static str {
        "Use \"\"\"triple double quotes\"\"\"."
    }

    fn explanation(&self) -> &'static str {
        "For consistency, always use \"\"\"triple double quotes\"\"\" around docstrings.\n\
         Use r\"\"\"raw triple double quotes\"\"\" if you use any backslashes in your\n\
         docstrings. For Unicode docstrings, use u\"\"\"Unicode triple-quoted strings\"\"\"."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> bool {
        LiteralParts::parse(ctx.docstring).quote != QuoteStyle::TripleDouble
    }
}

pub struct Backslashes;

impl Rule for Backslashes {
    fn id(&self) -> &'static str {
        "backslashes"
    }

    fn message(&self) -> &'static str {
        "Use r\"\"\" if any backslashes in your docstrings."
    }

    fn explanation(&self) -> &'static str {
        "A backslash in a regular string starts an escape sequence. Docstrings that\n\
         contain backslashes should be raw strings so the text reads as written."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> bool {
        ctx.docstring.contains('\\') && !LiteralParts::parse(ctx.docstring).prefix.is_raw()
    }
}

pub struct UnicodeDocstring;

impl Rule for UnicodeDocstring {
    fn id(&self) -> &'static str {
        "unicode-docstring"
    }

    fn message(&self) -> &'static str {
        "Use u\"\"\" for Unicode docstrings."
    }

    fn explanation(&self) -> &'static str {
        "Docstrings containing non-ASCII characters should be declared with the\n\
         u\"\"\" prefix."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> bool {
        !ctx.docstring.is_ascii() && !LiteralParts::parse(ctx.docstring).prefix.is_unicode()
    }
}

pub struct EndsWithPeriod;

impl Rule for EndsWithPeriod {
    fn id(&self) -> &'static str {
        "ends-with-period"
    }

    fn message(&self) -> &'static str {
        "Docstring should end with a period."
    }

    fn explanation(&self) -> &'static str {
        "The docstring is a phrase ending in a period. It prescribes the function or\n\
         method's effect as a command (\"Do this\", \"Return that\"), not as a description."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> bool {
        !LiteralParts::parse(ctx.docstring)
            .content
            .trim_end()
            .ends_with('.')
    }
}

pub struct BlankBeforeAfterClass;

impl Rule for BlankBeforeAfterClass {
    fn id(&self) -> &'static str {
        "blank-before-after-class"
    }

    fn message(&self) -> &'static str {
        "Class docstring should have 1 blank line around them."
    }

    fn explanation(&self) -> &'static str {
        "Insert a blank line before and after all docstrings (one-line or multi-line)\n\
         that document a class. The class's methods are separated from each other by a\n\
         single blank line, and the docstring needs to be offset from the first method\n\
         by a blank line; for symmetry, put a blank line between the class header and\n\
         the docstring."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> bool {
        let Some(context) = ctx.context.filter(|c| is_class_context(c)) else {
            return false;
        };
        let Some(at) = ctx.docstring_start() else {
            return false;
        };

        let before: Vec<bool> = context[..at].split('\n').map(is_blank).collect();
        if !before.ends_with(&[false, true, true]) {
            return true;
        }

        let after: Vec<bool> = context[at + ctx.docstring.len()..]
            .split('\n')
            .map(is_blank)
            .collect();
        !after.iter().all(|blank| *blank) && !after.starts_with(&[true, true, false])
    }
}

pub struct BlankAfterSummary;

impl Rule for BlankAfterSummary {
    fn id(&self) -> &'static str {
        "blank-after-summary"
    }

    fn message(&self) -> &'static str {
        "Multi-line docstring summary should be separated by a blank line."
    }

    fn explanation(&self) -> &'static str {
        "Multi-line docstrings consist of a summary line just like a one-line\n\
         docstring, followed by a blank line, followed by a more elaborate description."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> bool {
        let lines = LiteralParts::parse(ctx.docstring).lines();
        lines.len() > 1 && !is_blank(lines[1])
    }
}

pub struct Indent;

impl Rule for Indent {
    fn id(&self) -> &'static str {
        "indent"
    }

    fn message(&self) -> &'static str {
        "The entire docstring should be indented same as code."
    }

    fn explanation(&self) -> &'static str {
        "The entire docstring is indented the same as the quotes at its first line.\n\
         Continuation lines must share the indentation of the surrounding code."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> bool {
        let Some(context) = ctx.context else {
            return false;
        };
        let Some(at) = ctx.docstring_start() else {
            return false;
        };
        let line_start = context[..at].rfind('\n').map_or(0, |i| i + 1);
        let body_indent = &context[line_start..at];
        if !is_blank(body_indent) {
            return false;
        }

        let continuation: Vec<&str> = ctx
            .docstring
            .split('\n')
            .skip(1)
            .filter(|line| !is_blank(line))
            .collect();
        if continuation.is_empty() {
            return false;
        }

        let misaligned = continuation
            .iter()
            .any(|line| !leading_whitespace(line).starts_with(body_indent));
        let aligned = continuation
            .iter()
            .any(|line| leading_whitespace(line) == body_indent);
        misaligned || !aligned
    }
}

pub struct BlankAfterLastParagraph;

impl Rule for BlankAfterLastParagraph {
    fn id(&self) -> &'static str {
        "blank-after-last-paragraph"
    }

    fn message(&self) -> &'static str {
        "Multi-line docstring should end with 1 blank line."
    }

    fn explanation(&self) -> &'static str {
        "Insert a blank line between the last paragraph in a multi-line docstring and\n\
         its closing quotes, placing the closing quotes on a line by themselves."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> bool {
        let lines = LiteralParts::parse(ctx.docstring).lines();
        if lines.len() == 1 {
            return false;
        }
        let blanks: Vec<bool> = lines.iter().map(|line| is_blank(line)).collect();
        !blanks.ends_with(&[false, true, true])
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
