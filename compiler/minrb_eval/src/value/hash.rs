//! Hash table keyed by structurally-compared values.

use rustc_hash::FxHashMap;

use super::Value;

/// Key/value table backing `Value::Hash`.
///
/// Lookup is by strict equality ([`Value::eql`]), so `1` and `1.0` are
/// different keys. Entries keep their first-insertion
/// order so rendering is deterministic; overwriting a key keeps its slot.
#[derive(Clone, Default)]
pub struct HashValue {
    slots: FxHashMap<Value, usize>,
    entries: Vec<(Value, Value)>,
}

impl HashValue {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, returning the previous value if any.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        if let Some(&slot) = self.slots.get(&key) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        self.slots.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.slots.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}
