//! Evaluation errors.
//!
//! Every failure aborts the whole run; there is no recovery inside the
//! evaluator. Errors are built through the factory functions below so each
//! message is spelled in exactly one place.

use minrb_ir::LowerError;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Syntax tree
    #[error("unknown node kind `{tag}`")]
    UnknownNodeKind { tag: String },
    #[error("malformed `{tag}` node: {reason}")]
    MalformedNode { tag: String, reason: String },

    // Calls
    #[error("undefined function: {name}")]
    UnknownFunction { name: String },
    #[error("{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("maximum call depth of {limit} exceeded")]
    StackOverflow { limit: usize },

    // Arithmetic
    #[error("divided by 0")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Types
    #[error("cannot apply `{operation}` to {left} and {right}")]
    TypeMismatch {
        operation: &'static str,
        left: &'static str,
        right: String,
    },
    #[error("cannot convert {value} into Integer")]
    ConversionError { value: String },

    // Access
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    // Output
    #[error("cannot write output: {message}")]
    Output { message: String },
}

/// An evaluation failure plus the user functions it unwound through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: EvalErrorKind,
    /// Function names, innermost first.
    trace: Vec<String>,
}

impl EvalError {
    /// Create an error with an empty call trace.
    pub fn new(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            trace: Vec::new(),
        }
    }

    /// The error category.
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    /// Names of the user functions the error propagated out of, innermost first.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Record that the error propagated out of function `name`.
    #[must_use]
    pub fn with_frame(mut self, name: &str) -> Self {
        self.trace.push(name.to_owned());
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<LowerError> for EvalError {
    fn from(err: LowerError) -> Self {
        match err {
            LowerError::MalformedNode { tag, reason } => {
                EvalErrorKind::MalformedNode { tag, reason }.into()
            }
        }
    }
}

// Syntax Tree Errors

pub fn unknown_node_kind(tag: &str) -> EvalError {
    EvalErrorKind::UnknownNodeKind {
        tag: tag.to_owned(),
    }
    .into()
}

// Call Errors

pub fn unknown_function(name: &str) -> EvalError {
    EvalErrorKind::UnknownFunction {
        name: name.to_owned(),
    }
    .into()
}

pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch {
        name: name.to_owned(),
        expected,
        got,
    }
    .into()
}

pub fn stack_overflow(limit: usize) -> EvalError {
    EvalErrorKind::StackOverflow { limit }.into()
}

// Arithmetic Errors

pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

// Type Errors

/// `operation` could not be applied to a `left` operand and a `right` operand.
pub fn type_mismatch(operation: &'static str, left: &'static str, right: impl Into<String>) -> EvalError {
    EvalErrorKind::TypeMismatch {
        operation,
        left,
        right: right.into(),
    }
    .into()
}

pub fn conversion_error(value: &Value) -> EvalError {
    EvalErrorKind::ConversionError {
        value: value.inspect(),
    }
    .into()
}

// Access Errors

pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalErrorKind::IndexOutOfBounds { index, len }.into()
}

pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    }
    .into()
}

// Output Errors

pub fn output_error(err: &std::io::Error) -> EvalError {
    EvalErrorKind::Output {
        message: err.to_string(),
    }
    .into()
}
