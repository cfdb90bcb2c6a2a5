//! User-defined functions.
//!
//! The registry is owned by the interpreter for the length of one run. It
//! starts empty and is only written by `func_def`.

use rustc_hash::FxHashMap;

use minrb_ir::{Name, Node};

/// A user function: its parameter names and body, borrowed from the tree.
#[derive(Clone, Copy, Debug)]
pub struct FunctionDef<'a> {
    pub name: Name,
    pub params: &'a [Name],
    pub body: &'a Node,
}

/// Run-wide table of user functions.
#[derive(Debug, Default)]
pub struct FunctionRegistry<'a> {
    functions: FxHashMap<Name, FunctionDef<'a>>,
}

impl<'a> FunctionRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `def`, replacing and returning any earlier definition of the
    /// same name.
    pub fn define(&mut self, def: FunctionDef<'a>) -> Option<FunctionDef<'a>> {
        self.functions.insert(def.name, def)
    }

    pub fn get(&self, name: Name) -> Option<FunctionDef<'a>> {
        self.functions.get(&name).copied()
    }

    pub fn contains(&self, name: Name) -> bool {
        self.functions.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minrb_ir::{Literal, StringInterner};

    #[test]
    fn later_definition_wins() {
        let interner = StringInterner::new();
        let f = interner.intern("f");
        let first = Node::lit(Literal::Int(1));
        let second = Node::lit(Literal::Int(2));

        let mut registry = FunctionRegistry::new();
        assert!(registry
            .define(FunctionDef { name: f, params: &[], body: &first })
            .is_none());
        let replaced = registry.define(FunctionDef { name: f, params: &[], body: &second });

        assert_eq!(replaced.map(|d| d.body), Some(&first));
        assert_eq!(registry.get(f).map(|d| d.body), Some(&second));
        assert_eq!(registry.len(), 1);
    }
}
