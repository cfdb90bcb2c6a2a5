//! minrb Eval - tree-walking evaluator for minrb programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Interpreter`: node dispatch, the function registry and builtins
//! - `Environment`: flat variable bindings, copied on every user call
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `Value`: closed set of runtime values; arrays and hashes are shared
//! - `PrintHandlerImpl`: where `p` output goes
//!
//! [`eval_sexp`] is the one-call entry point: lower a parsed tree and run it.

mod builtins;
mod config;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod registry;
mod stack;
mod value;

use minrb_ir::{lower, Sexp, StringInterner};

pub use builtins::{to_integer, Builtin};
pub use config::EvalConfig;
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, writer_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler, WriterPrintHandler,
};
pub use registry::{FunctionDef, FunctionRegistry};
pub use stack::ensure_sufficient_stack;
pub use value::{HashValue, Shared, Value};

/// Lower `sexp` and run it once in a fresh environment.
///
/// A known node with the wrong shape rejects the whole tree before anything
/// runs, so a malformed program produces no output. An unknown node kind
/// fails only when evaluation reaches it.
///
/// Identifiers are interned into `interner` and live as long as the process.
/// Callers running many programs should share one interner so repeated names
/// are stored once.
pub fn eval_sexp(
    sexp: &Sexp,
    interner: &StringInterner,
    config: EvalConfig,
    print_handler: SharedPrintHandler,
) -> Result<(), EvalError> {
    let root = lower(sexp, interner)?;
    let mut interpreter = InterpreterBuilder::new(interner)
        .config(config)
        .print_handler(print_handler)
        .build();
    interpreter.run(&root)
}
