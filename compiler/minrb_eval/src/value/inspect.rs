//! External representation of values, as written by `p`.

use std::fmt::Write;

use super::Value;

impl Value {
    /// Render the literal form of this value.
    ///
    /// Collections render recursively; a collection that contains itself
    /// renders the inner occurrence as `[...]` or `{...}`.
    pub fn inspect(&self) -> String {
        let mut out = String::new();
        self.write_inspect(&mut out, &mut Vec::new());
        out
    }

    fn write_inspect(&self, out: &mut String, visiting: &mut Vec<usize>) {
        match self {
            Value::Int(n) => {
                let _ = write!(out, "{n}");
            }
            Value::Float(f) => out.push_str(&format_float(*f)),
            Value::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Value::Nil => out.push_str("nil"),
            Value::Str(s) => write_string_literal(out, s),
            Value::Array(items) => {
                if visiting.contains(&items.addr()) {
                    out.push_str("[...]");
                    return;
                }
                visiting.push(items.addr());
                out.push('[');
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_inspect(out, visiting);
                }
                out.push(']');
                visiting.pop();
            }
            Value::Hash(table) => {
                if visiting.contains(&table.addr()) {
                    out.push_str("{...}");
                    return;
                }
                visiting.push(table.addr());
                out.push('{');
                for (i, (key, value)) in table.borrow().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    key.write_inspect(out, visiting);
                    out.push_str("=>");
                    value.write_inspect(out, visiting);
                }
                out.push('}');
                visiting.pop();
            }
        }
    }
}

/// Shortest round-trip decimal, always with a fractional part.
///
/// Magnitudes outside `[1e-4, 1e16)` switch to `1.0e+20` notation.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = f.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        // Debug keeps a trailing `.0` on integral floats
        return format!("{f:?}");
    }

    let scientific = format!("{f:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    if mantissa.contains('.') {
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    } else {
        format!("{mantissa}.0e{sign}{:02}", exponent.unsigned_abs())
    }
}

fn write_string_literal(out: &mut String, s: &str) {
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{1b}' => out.push_str("\\e"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => out.push_str("\\#"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
