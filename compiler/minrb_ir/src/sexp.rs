//! Untyped tagged tree, as emitted by the external parser.
//!
//! A node is a list whose head is the tag string: `["var_ref", "x"]`.
//! Scalars appear as `lit` payloads and as identifiers. The JSON encoding maps
//! one-to-one onto [`Sexp`].

use serde::Deserialize;

/// Untyped parser output.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Sexp {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Sexp>),
}

impl Sexp {
    /// Decode a JSON document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Build a node: `tag` followed by `children`.
    pub fn node(tag: &str, children: impl IntoIterator<Item = Sexp>) -> Self {
        let mut items = vec![Sexp::Str(tag.to_owned())];
        items.extend(children);
        Sexp::List(items)
    }

    /// Human-readable shape, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Sexp::Nil => "null",
            Sexp::Bool(_) => "boolean",
            Sexp::Int(_) => "integer",
            Sexp::Float(_) => "float",
            Sexp::Str(_) => "string",
            Sexp::List(_) => "list",
        }
    }
}

impl From<i64> for Sexp {
    fn from(n: i64) -> Self {
        Sexp::Int(n)
    }
}

impl From<f64> for Sexp {
    fn from(f: f64) -> Self {
        Sexp::Float(f)
    }
}

impl From<bool> for Sexp {
    fn from(b: bool) -> Self {
        Sexp::Bool(b)
    }
}

impl From<&str> for Sexp {
    fn from(s: &str) -> Self {
        Sexp::Str(s.to_owned())
    }
}

impl From<String> for Sexp {
    fn from(s: String) -> Self {
        Sexp::Str(s)
    }
}

#[cfg(test)]
mod tests;
