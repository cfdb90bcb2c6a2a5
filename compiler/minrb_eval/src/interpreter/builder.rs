//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use minrb_ir::StringInterner;

use super::Interpreter;
use crate::registry::FunctionRegistry;
use crate::{stdout_handler, EvalConfig, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults: lenient variables, unbounded call depth, output to stdout.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    print_handler: Option<SharedPrintHandler>,
    config: EvalConfig,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            print_handler: None,
            config: EvalConfig::default(),
        }
    }

    /// Route `p` output through `handler`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            functions: FunctionRegistry::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            config: self.config,
            call_depth: 0,
        }
    }
}
