//! minrb IR - syntax tree types shared by the evaluator and the driver.
//!
//! The external parser hands over a program as an untyped tagged tree
//! ([`Sexp`]). [`lower`] validates it and produces the typed [`Node`] tree the
//! evaluator walks, interning every identifier into a [`Name`] on the way.

pub mod ast;
mod interner;
pub mod lower;
mod name;
mod sexp;

pub use ast::{BinaryOp, Literal, Node};
pub use interner::{InternError, StringInterner};
pub use lower::{lower, LowerError};
pub use name::Name;
pub use sexp::Sexp;
