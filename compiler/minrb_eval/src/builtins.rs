//! Native functions callable when no user function of the same name exists.

use crate::errors::{conversion_error, integer_overflow};
use crate::{EvalResult, Value};

/// The builtin functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Builtin {
    /// `p(x...)`: print the inspect form of each argument.
    P,
    /// `Integer(x)`: coerce to an integer.
    Integer,
}

impl Builtin {
    pub const ALL: [Builtin; 2] = [Builtin::P, Builtin::Integer];

    /// Resolve a call name to a builtin.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Builtin::P => "p",
            Builtin::Integer => "Integer",
        }
    }
}

/// Result of `p(args...)`: nothing for no arguments, the argument itself for
/// one, an array of them for several.
pub fn p_result(mut args: Vec<Value>) -> Value {
    match args.len() {
        0 => Value::Nil,
        1 => args.pop().unwrap_or(Value::Nil),
        _ => Value::array(args),
    }
}

/// Coerce a value the way `Integer(x)` does.
pub fn to_integer(value: &Value) -> EvalResult {
    match value {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Float(f) => float_to_integer(*f, value),
        Value::Str(s) => match parse_integer(s) {
            Some(Digits::Value(n)) => Ok(Value::Int(n)),
            Some(Digits::Overflow) => Err(integer_overflow("Integer()")),
            None => Err(conversion_error(value)),
        },
        Value::Bool(_) | Value::Nil | Value::Array(_) | Value::Hash(_) => {
            Err(conversion_error(value))
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "range is checked first; truncation toward zero is the conversion"
)]
fn float_to_integer(f: f64, original: &Value) -> EvalResult {
    // i64::MIN is exactly representable, i64::MAX is not
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !f.is_finite() {
        return Err(conversion_error(original));
    }
    let truncated = f.trunc();
    if truncated < -LIMIT || truncated >= LIMIT {
        return Err(integer_overflow("Integer()"));
    }
    Ok(Value::Int(truncated as i64))
}

enum Digits {
    Value(i64),
    /// Well-formed, but outside the `i64` range.
    Overflow,
}

/// Parse an integer literal: optional surrounding ASCII whitespace, optional
/// sign, optional radix prefix, digits separated by single underscores.
fn parse_integer(text: &str) -> Option<Digits> {
    let text = text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'));
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = split_radix(unsigned);
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return None;
    }

    let mut magnitude: u64 = 0;
    let mut overflowed = false;
    let mut previous_underscore = false;
    for c in digits.chars() {
        if c == '_' {
            if previous_underscore {
                return None;
            }
            previous_underscore = true;
            continue;
        }
        previous_underscore = false;
        let digit = c.to_digit(radix)?;
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(m) => magnitude = m,
            None => overflowed = true,
        }
    }

    let value = if overflowed {
        None
    } else if negative {
        0_i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    Some(value.map_or(Digits::Overflow, Digits::Value))
}

fn split_radix(s: &str) -> (u32, &str) {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some('0'), Some('x' | 'X')) => (16, &s[2..]),
        (Some('0'), Some('b' | 'B')) => (2, &s[2..]),
        (Some('0'), Some('o' | 'O')) => (8, &s[2..]),
        (Some('0'), Some('d' | 'D')) => (10, &s[2..]),
        // "0_17" is octal with a separator after the leading zero
        (Some('0'), Some('_')) => (8, &s[2..]),
        (Some('0'), Some(_)) => (8, &s[1..]),
        _ => (10, s),
    }
}

#[cfg(test)]
mod tests;
