//! Variable bindings.
//!
//! There are no nested scopes. A function body runs in a shallow copy of its
//! caller's bindings ([`Environment::fork`]), so it sees every caller variable,
//! scalar writes stay local to the copy, and arrays/hashes stay aliased.

use rustc_hash::FxHashMap;

use minrb_ir::Name;

use crate::Value;

/// Flat name → value mapping.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    /// Bind or rebind `name`.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Is `name` bound?
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Copy every binding into a new environment for a function call.
    ///
    /// Collections are shared with `self`, not duplicated.
    pub fn fork(&self) -> Self {
        self.clone()
    }
}
