//! Evaluation settings.

/// Knobs that change how a program is evaluated.
///
/// The default matches the reference behaviour: unknown variables read as
/// `nil` and call depth is bounded only by memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Reading an unbound variable fails with `UndefinedVariable` instead of
    /// yielding `nil`.
    pub strict_variables: bool,
    /// Maximum nesting of user-function calls before `StackOverflow`.
    pub max_call_depth: Option<usize>,
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strict_variables(mut self, strict: bool) -> Self {
        self.strict_variables = strict;
        self
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }
}
