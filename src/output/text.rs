use std::fmt::Write;
use std::path::Path;

use crate::checker::FileReport;
use crate::error::Result;
use crate::rules::Violation;

use super::OutputFormatter;

pub const SEPARATOR_WIDTH: usize = 80;
pub const SCRIPT_NOTE: &str = "Note: checks are relaxed for scripts (with #!) compared to modules";

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

#[allow(clippy::struct_excessive_bools)]
pub struct TextFormatter {
    use_colors: bool,
    explain: bool,
    range: bool,
    quote: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            explain: false,
            range: false,
            quote: false,
        }
    }

    /// Append each rule's full rationale.
    #[must_use]
    pub const fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    /// Show where each offending docstring ends as well as where it starts.
    #[must_use]
    pub const fn with_range(mut self, range: bool) -> Self {
        self.range = range;
        self
    }

    /// Quote the offending docstring under each violation.
    #[must_use]
    pub const fn with_quote(mut self, quote: bool) -> Self {
        self.quote = quote;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn location(&self, path: &Path, violation: &Violation) -> String {
        let path = path.display();
        match (violation.position, violation.end) {
            (None, _) => format!("{path}: module docstring"),
            (Some(start), Some(end)) if self.range => format!("{path}:{start}..{end}"),
            (Some(start), _) => format!("{path}:{start}"),
        }
    }

    fn format_violation(&self, path: &Path, violation: &Violation, output: &mut String) {
        let location = self.colorize(&self.location(path, violation), ansi::YELLOW);
        writeln!(output, "{location}: {}", violation.message).ok();

        if self.explain {
            for line in violation.explanation.lines() {
                writeln!(output, "    {line}").ok();
            }
        }

        if self.quote {
            for line in violation.docstring.lines() {
                writeln!(output, "    {line}").ok();
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "{}", "=".repeat(SEPARATOR_WIDTH)).ok();
        writeln!(output, "{SCRIPT_NOTE}").ok();

        for report in reports {
            if let Some(error) = report.error() {
                writeln!(output, "{}", self.colorize(&error.to_string(), ansi::RED)).ok();
            }
        }

        let mut violations: Vec<(&Path, &Violation)> = reports
            .iter()
            .flat_map(|report| {
                report
                    .violations()
                    .iter()
                    .map(move |violation| (report.path.as_path(), violation))
            })
            .collect();
        violations.sort_by(|a, b| a.0.cmp(b.0).then(a.1.position.cmp(&b.1.position)));

        for (path, violation) in violations {
            self.format_violation(path, violation, &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
