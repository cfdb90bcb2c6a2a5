//! Runtime values.
//!
//! A closed set of variants, matched exhaustively wherever values are
//! inspected. Scalars are stored inline. Strings are immutable and shared by
//! `Rc`. Arrays and hashes live in [`Shared`] cells, so cloning a `Value` of
//! either kind aliases the collection rather than copying it.

mod hash;
mod inspect;
mod shared;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use minrb_ir::Literal;

pub use hash::HashValue;
pub use shared::Shared;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// The absent value.
    Nil,
    /// Immutable string.
    Str(Rc<str>),
    /// Ordered, mutable, aliased sequence.
    Array(Shared<Vec<Value>>),
    /// Mutable, aliased key/value table.
    Hash(Shared<HashValue>),
}

// Factory Methods

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    /// Create a fresh array.
    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Shared::new(items))
    }

    /// Create a fresh hash.
    #[inline]
    pub fn hash(table: HashValue) -> Self {
        Value::Hash(Shared::new(table))
    }

    /// Materialise a literal. Every evaluation yields a new value.
    pub fn from_literal(literal: &Literal) -> Self {
        match literal {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Int(n) => Value::Int(*n),
            Literal::Float(f) => Value::Float(*f),
            Literal::Str(s) => Value::string(s),
        }
    }
}

// Value Methods

impl Value {
    /// Everything except `false` and `nil` is truthy, including `0` and `""`.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Nil)
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Bool(true) => "true",
            Value::Bool(false) => "false",
            Value::Nil => "nil",
            Value::Str(_) => "String",
            Value::Array(_) => "Array",
            Value::Hash(_) => "Hash",
        }
    }

    /// Snapshot of an array's elements.
    pub fn array_items(&self) -> Option<Vec<Value>> {
        match self {
            Value::Array(items) => Some(items.borrow().clone()),
            _ => None,
        }
    }

    /// Check equality the way `==` does.
    ///
    /// Integers and floats compare numerically (`1 == 1.0`); other values of
    /// different variants are never equal. Arrays compare element-wise,
    /// hashes as key/value sets with keys matched by [`Value::eql`]. A pair
    /// of collections already being compared further up counts as equal, so
    /// self-referential structures terminate.
    pub fn equals(&self, other: &Value) -> bool {
        self.equals_guarded(other, Equality::Numeric, &mut Vec::new())
    }

    /// Check strict equality, as used for hash keys.
    ///
    /// Like [`Value::equals`] except that numbers of different variants are
    /// distinct, so `1` and `1.0` are different keys.
    pub fn eql(&self, other: &Value) -> bool {
        self.equals_guarded(other, Equality::Strict, &mut Vec::new())
    }

    #[expect(clippy::float_cmp, reason = "IEEE equality is the language semantics")]
    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed comparison promotes the integer like arithmetic does"
    )]
    fn equals_guarded(
        &self,
        other: &Value,
        mode: Equality,
        in_progress: &mut Vec<(usize, usize)>,
    ) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                mode == Equality::Numeric && *a as f64 == *b
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                if a.ptr_eq(b) {
                    return true;
                }
                let pair = (a.addr(), b.addr());
                if in_progress.contains(&pair) {
                    return true;
                }
                in_progress.push(pair);
                let (a, b) = (a.borrow(), b.borrow());
                let equal = a.len() == b.len()
                    && a
                        .iter()
                        .zip(b.iter())
                        .all(|(x, y)| x.equals_guarded(y, mode, in_progress));
                in_progress.pop();
                equal
            }
            (Value::Hash(a), Value::Hash(b)) => {
                if a.ptr_eq(b) {
                    return true;
                }
                let pair = (a.addr(), b.addr());
                if in_progress.contains(&pair) {
                    return true;
                }
                in_progress.push(pair);
                let (a, b) = (a.borrow(), b.borrow());
                let equal = a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.get(key)
                            .is_some_and(|other| value.equals_guarded(other, mode, in_progress))
                    });
                in_progress.pop();
                equal
            }
            _ => false,
        }
    }
}

/// How numbers of different variants compare.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Equality {
    Numeric,
    Strict,
}

// Trait Implementations

/// Strict equality ([`Value::eql`]), so `Eq` and `Hash` agree for hash keys.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.eql(other)
    }
}

/// `Eq` backs hash-key lookup. `NaN` keys are never found again, like any
/// other `NaN` comparison.
impl Eq for Value {}

impl Hash for Value {
    /// Consistent with [`Value::eql`] without looking inside collections
    /// beyond an array's length, so hashing never recurses into cycles and
    /// never needs a borrow a caller might be holding mutably.
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Int(n) => n.hash(state),
            Value::Float(f) => {
                // 0.0 == -0.0, so both must hash alike
                let normalized = if *f == 0.0 { 0.0 } else { *f };
                normalized.to_bits().hash(state);
            }
            Value::Bool(b) => b.hash(state),
            Value::Str(s) => s.hash(state),
            Value::Array(items) => items.borrow().len().hash(state),
            Value::Nil | Value::Hash(_) => {}
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Nil => write!(f, "Nil"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Array(_) => write!(f, "Array({})", self.inspect()),
            Value::Hash(_) => write!(f, "Hash({})", self.inspect()),
        }
    }
}

/// Displays the external representation, as printed by `p`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;
