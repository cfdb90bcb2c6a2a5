//! Typed syntax tree.
//!
//! One [`Node`] variant per node tag the parser emits. Nodes are immutable
//! once lowered; the evaluator only reads them.

mod operators;

pub use operators::BinaryOp;

use crate::Name;

/// Literal payload of a `lit` node.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// A syntax tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// `lit(value)`
    Lit(Literal),
    /// `op(left, right)` for every [`BinaryOp`].
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `stmts(node...)`
    Stmts(Vec<Node>),
    /// `var_ref(name)`
    VarRef(Name),
    /// `var_assign(name, value)`
    VarAssign { name: Name, value: Box<Node> },
    /// `if(cond, then[, else])`
    If {
        cond: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    /// `while(cond, body)`
    While { cond: Box<Node>, body: Box<Node> },
    /// `func_call(name, arg...)`
    FuncCall { name: Name, args: Vec<Node> },
    /// `func_def(name, [param...], body)`
    FuncDef {
        name: Name,
        params: Vec<Name>,
        body: Box<Node>,
    },
    /// `ary_new(node...)`
    AryNew(Vec<Node>),
    /// `ary_ref(collection, index)`, shared by arrays and hashes.
    AryRef {
        collection: Box<Node>,
        index: Box<Node>,
    },
    /// `ary_assign(collection, index, value)`, shared by arrays and hashes.
    AryAssign {
        collection: Box<Node>,
        index: Box<Node>,
        value: Box<Node>,
    },
    /// `hash_new(k, v, ...)`, stored as key/value pairs.
    HashNew(Vec<(Node, Node)>),
    /// A tag with no known construct. Its children are not lowered; the
    /// evaluator fails only if it reaches this node.
    Unknown { tag: String },
}

impl Node {
    /// The node tag as the parser spells it.
    pub fn tag(&self) -> &str {
        match self {
            Node::Lit(_) => "lit",
            Node::Binary { op, .. } => op.as_symbol(),
            Node::Stmts(_) => "stmts",
            Node::VarRef(_) => "var_ref",
            Node::VarAssign { .. } => "var_assign",
            Node::If { .. } => "if",
            Node::While { .. } => "while",
            Node::FuncCall { .. } => "func_call",
            Node::FuncDef { .. } => "func_def",
            Node::AryNew(_) => "ary_new",
            Node::AryRef { .. } => "ary_ref",
            Node::AryAssign { .. } => "ary_assign",
            Node::HashNew(_) => "hash_new",
            Node::Unknown { tag } => tag,
        }
    }

    /// Literal node shorthand.
    pub fn lit(literal: Literal) -> Self {
        Node::Lit(literal)
    }

    /// Binary node shorthand.
    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
