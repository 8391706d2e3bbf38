mod checks;

pub use checks::{
    Backslashes, BlankAfterLastParagraph, BlankAfterSummary, BlankBeforeAfterClass,
    EndsWithPeriod, Indent, TripleDoubleQuotes, UnicodeDocstring, default_rules,
};

use std::sync::LazyLock;

use serde::Serialize;

use crate::analyzer::extract_docstring;
use crate::position::Position;

/// Everything a rule may look at for one docstring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext<'a> {
    /// Literal source text, prefix and delimiters included
    pub docstring: &'a str,
    /// Enclosing block text; `None` for the module docstring
    pub context: Option<&'a str>,
    /// File starts with `#!`
    pub is_script: bool,
    /// Byte offset of the docstring inside `context`, when known
    pub offset: Option<usize>,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub const fn new(docstring: &'a str, context: Option<&'a str>, is_script: bool) -> Self {
        Self {
            docstring,
            context,
            is_script,
            offset: None,
        }
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Where the docstring starts inside the context.
    ///
    /// Uses the recorded offset when it points at the docstring, otherwise the
    /// block's own docstring. Text that merely repeats the docstring elsewhere
    /// in the block (e.g. in a default argument) is never matched.
    #[must_use]
    pub fn docstring_start(&self) -> Option<usize> {
        let context = self.context?;
        if let Some(offset) = self.offset {
            if context
                .get(offset..)
                .is_some_and(|rest| rest.starts_with(self.docstring))
            {
                return Some(offset);
            }
        }
        extract_docstring(context)
            .filter(|literal| literal.raw == self.docstring)
            .map(|literal| literal.offset)
    }
}

/// A single docstring convention.
pub trait Rule: Send + Sync {
    /// Stable identifier, e.g. `ends-with-period`.
    fn id(&self) -> &'static str;

    /// One-line description of the convention.
    fn message(&self) -> &'static str;

    /// Longer rationale shown in explain mode.
    fn explanation(&self) -> &'static str;

    /// Returns `true` when the docstring violates the convention.
    fn check(&self, ctx: &RuleContext<'_>) -> bool;
}

/// One failed rule for one docstring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: &'static str,
    pub message: &'static str,
    #[serde(skip)]
    pub explanation: &'static str,
    /// Start of the docstring; `None` for the module docstring.
    pub position: Option<Position>,
    /// End of the docstring; `None` for the module docstring.
    pub end: Option<Position>,
    pub docstring: String,
}

impl Violation {
    #[must_use]
    pub fn new(rule: &dyn Rule, ctx: &RuleContext<'_>, span: Option<(Position, Position)>) -> Self {
        Self {
            rule: rule.id(),
            message: rule.message(),
            explanation: rule.explanation(),
            position: span.map(|(start, _)| start),
            end: span.map(|(_, end)| end),
            docstring: ctx.docstring.to_string(),
        }
    }

    #[must_use]
    pub const fn is_module_level(&self) -> bool {
        self.position.is_none()
    }
}

/// Ordered registry of rules; every rule runs for every docstring.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

static DEFAULT_ENGINE: LazyLock<RuleEngine> = LazyLock::new(RuleEngine::default);

impl RuleEngine {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(AsRef::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against `ctx`, in registry order.
    ///
    /// `span` is the docstring's start and end; pass `None` for the module
    /// docstring.
    #[must_use]
    pub fn evaluate(
        &self,
        ctx: &RuleContext<'_>,
        span: Option<(Position, Position)>,
    ) -> Vec<Violation> {
        self.rules()
            .filter(|rule| rule.check(ctx))
            .map(|rule| Violation::new(rule, ctx, span))
            .collect()
    }

    /// Look up a rule by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Rule> {
        self.rules().find(|rule| rule.id() == id)
    }
}

/// Evaluate the default rule set without a source position.
#[must_use]
pub fn evaluate_rules(ctx: &RuleContext<'_>) -> Vec<Violation> {
    DEFAULT_ENGINE.evaluate(ctx, None)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
