//! Array and hash literals, index reads and index writes.
//!
//! `ary_ref` and `ary_assign` serve both arrays and hashes; the collection's
//! runtime kind picks the behaviour.

use minrb_ir::Node;

use super::Interpreter;
use crate::errors::{index_out_of_bounds, type_mismatch};
use crate::{EvalError, EvalResult, Environment, HashValue, Value};

/// Array writes beyond this index fail instead of allocating the filler.
const MAX_ARRAY_LEN: usize = 1 << 28;

impl<'a> Interpreter<'a> {
    pub(super) fn eval_array_literal(
        &mut self,
        items: &'a [Node],
        env: &mut Environment,
    ) -> EvalResult {
        let values = items
            .iter()
            .map(|item| self.eval(item, env))
            .collect::<Result<Vec<Value>, _>>()?;
        Ok(Value::array(values))
    }

    /// Later duplicate keys overwrite earlier ones.
    pub(super) fn eval_hash_literal(
        &mut self,
        pairs: &'a [(Node, Node)],
        env: &mut Environment,
    ) -> EvalResult {
        let mut table = HashValue::new();
        for (key, value) in pairs {
            let key = self.eval(key, env)?;
            let value = self.eval(value, env)?;
            table.insert(key, value);
        }
        Ok(Value::hash(table))
    }

    pub(super) fn eval_index(
        &mut self,
        collection: &'a Node,
        index: &'a Node,
        env: &mut Environment,
    ) -> EvalResult {
        let target = self.eval(collection, env)?;
        let index = self.eval(index, env)?;
        read_index(&target, &index)
    }

    /// Evaluates collection, index, value in that order and yields the value.
    pub(super) fn eval_index_assign(
        &mut self,
        collection: &'a Node,
        index: &'a Node,
        value: &'a Node,
        env: &mut Environment,
    ) -> EvalResult {
        let target = self.eval(collection, env)?;
        let index = self.eval(index, env)?;
        let value = self.eval(value, env)?;
        write_index(&target, &index, value.clone())?;
        Ok(value)
    }
}

/// `target[index]`. Misses read as `nil`.
pub(crate) fn read_index(target: &Value, index: &Value) -> EvalResult {
    match target {
        Value::Array(items) => {
            let i = integer_index(target, index)?;
            let items = items.borrow();
            Ok(resolve_index(i, items.len())
                .and_then(|slot| items.get(slot))
                .cloned()
                .unwrap_or(Value::Nil))
        }
        Value::Hash(table) => Ok(table.borrow().get(index).cloned().unwrap_or(Value::Nil)),
        Value::Str(s) => {
            let i = integer_index(target, index)?;
            let len = s.chars().count();
            Ok(resolve_index(i, len)
                .and_then(|slot| s.chars().nth(slot))
                .map_or(Value::Nil, |c| Value::string(c.to_string())))
        }
        _ => Err(type_mismatch("[]", target.type_name(), index.type_name())),
    }
}

/// `target[index] = value`, mutating the shared collection in place.
///
/// Arrays grow with `nil` filler up to a write past the end.
pub(crate) fn write_index(target: &Value, index: &Value, value: Value) -> Result<(), EvalError> {
    match target {
        Value::Array(items) => {
            let i = integer_index(target, index)?;
            let mut items = items.borrow_mut();
            let len = items.len();
            let slot = resolve_index(i, len)
                .filter(|&slot| slot < MAX_ARRAY_LEN)
                .ok_or_else(|| index_out_of_bounds(i, len))?;
            if slot >= len {
                items.resize(slot + 1, Value::Nil);
            }
            items[slot] = value;
            Ok(())
        }
        Value::Hash(table) => {
            // Key comparison may need to read this very table (`h[h] = v`),
            // so no borrow is held during the insert.
            let mut entries = std::mem::take(&mut *table.borrow_mut());
            entries.insert(index.clone(), value);
            *table.borrow_mut() = entries;
            Ok(())
        }
        _ => Err(type_mismatch("[]=", target.type_name(), index.type_name())),
    }
}

fn integer_index(target: &Value, index: &Value) -> Result<i64, EvalError> {
    match index {
        Value::Int(i) => Ok(*i),
        _ => Err(type_mismatch("[]", target.type_name(), index.type_name())),
    }
}

/// Map a possibly end-relative index onto a position. `None` when a negative
/// index reaches before the start. Non-negative indices may be past the end.
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        usize::try_from(index).ok()
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}
