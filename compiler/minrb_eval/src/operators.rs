//! Binary operator implementations for the evaluator.
//!
//! Direct enum dispatch on the operand pair. The value set is closed, so a
//! match covers every combination and anything unlisted is a type mismatch.

use minrb_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, type_mismatch};
use crate::{EvalError, EvalResult, Value};

/// Evaluate `left op right`.
///
/// Equality is defined for every pair of values and never fails. Everything
/// else needs compatible operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    if op.is_equality() {
        let equal = left.equals(right);
        return Ok(Value::Bool(if op == BinaryOp::Eq { equal } else { !equal }));
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(*a, *b, op),
        (Value::Int(a), Value::Float(b)) => eval_float_binary(int_to_float(*a), *b, op),
        (Value::Float(a), Value::Int(b)) => eval_float_binary(*a, int_to_float(*b), op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Str(s), Value::Int(n)) if op == BinaryOp::Mul => repeat_string(s, *n),
        (Value::Array(a), Value::Array(b)) if op == BinaryOp::Add => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::array(items))
        }
        _ => Err(mismatch(op, left, right)),
    }
}

#[inline]
fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    type_mismatch(op.as_symbol(), left.type_name(), right.type_name())
}

#[expect(
    clippy::cast_precision_loss,
    reason = "mixed Int/Float arithmetic promotes to Float, losing precision above 2^53"
)]
#[inline]
fn int_to_float(n: i64) -> f64 {
    n as f64
}

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

// Type-Specific Evaluation Functions

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            checked_arith(floor_div(a, b), "division")
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Ok(Value::Int(floor_mod(a, b)))
        }
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Eq | BinaryOp::NotEq => Ok(Value::Bool((a == b) == (op == BinaryOp::Eq))),
    }
}

/// Quotient rounded toward negative infinity. `None` only for `MIN / -1`.
///
/// `b` must be non-zero.
pub(crate) fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Some(q - 1)
    } else {
        Some(q)
    }
}

/// Remainder taking the sign of the divisor, so that
/// `floor_div(a, b) * b + floor_mod(a, b) == a`.
///
/// `b` must be non-zero.
pub(crate) fn floor_mod(a: i64, b: i64) -> i64 {
    // wrapping_rem gives 0 for MIN % -1
    let r = a.wrapping_rem(b);
    if r != 0 && ((r < 0) != (b < 0)) {
        r + b
    } else {
        r
    }
}

#[expect(clippy::float_cmp, reason = "IEEE equality is the language semantics")]
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    let value = match op {
        BinaryOp::Add => Value::Float(a + b),
        BinaryOp::Sub => Value::Float(a - b),
        BinaryOp::Mul => Value::Float(a * b),
        BinaryOp::Div => Value::Float(a / b),
        BinaryOp::Mod => {
            let r = a % b;
            if r != 0.0 && ((r < 0.0) != (b < 0.0)) {
                Value::Float(r + b)
            } else {
                Value::Float(r)
            }
        }
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
    };
    Ok(value)
}

fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
            Err(type_mismatch(op.as_symbol(), "String", "String"))
        }
    }
}

fn repeat_string(s: &str, count: i64) -> EvalResult {
    let Ok(count) = usize::try_from(count) else {
        return Err(type_mismatch("*", "String", "negative Integer"));
    };
    if s.len().checked_mul(count).is_none() {
        return Err(integer_overflow("string repetition"));
    }
    Ok(Value::string(s.repeat(count)))
}
