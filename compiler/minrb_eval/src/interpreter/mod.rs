//! Tree-walking interpreter for minrb.
//!
//! [`Interpreter::eval`] dispatches on the node kind and recurses into
//! children depth-first, left to right. Helper modules split out the larger
//! cases:
//!
//! - `call` - user function calls and builtins
//! - `collections` - array/hash literals and index access
//!
//! Every recursive step runs under [`ensure_sufficient_stack`].

mod builder;
mod call;
mod collections;

pub use builder::InterpreterBuilder;

use minrb_ir::{Name, Node, StringInterner};

use crate::errors::{undefined_variable, unknown_node_kind};
use crate::operators::evaluate_binary;
use crate::registry::{FunctionDef, FunctionRegistry};
use crate::stack::ensure_sufficient_stack;
use crate::{EvalConfig, EvalError, EvalResult, Environment, SharedPrintHandler, Value};

/// Evaluates one program.
///
/// The interpreter owns the function registry, so user functions defined in
/// one [`run`](Self::run) are gone by the next.
pub struct Interpreter<'a> {
    /// Resolves interned identifiers for builtins, errors and logs.
    pub(crate) interner: &'a StringInterner,
    /// User functions, borrowed from the tree being run.
    pub(crate) functions: FunctionRegistry<'a>,
    /// Where `p` writes.
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) config: EvalConfig,
    /// Number of user-function calls currently active.
    pub(crate) call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with default settings, printing to stdout.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Evaluate `root` once in a fresh, empty environment and discard its
    /// value. The function registry starts empty.
    pub fn run(&mut self, root: &'a Node) -> Result<(), EvalError> {
        self.functions = FunctionRegistry::new();
        self.call_depth = 0;
        tracing::debug!(root = root.tag(), "run started");

        let mut env = Environment::new();
        match self.eval(root, &mut env) {
            Ok(_) => {
                tracing::debug!(functions = self.functions.len(), "run finished");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "run failed");
                Err(err)
            }
        }
    }

    /// Evaluate a node in `env`.
    pub fn eval(&mut self, node: &'a Node, env: &mut Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(node, env))
    }

    fn eval_inner(&mut self, node: &'a Node, env: &mut Environment) -> EvalResult {
        match node {
            Node::Lit(literal) => Ok(Value::from_literal(literal)),

            Node::Binary { op, left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_binary(*op, &left, &right)
            }

            Node::Stmts(nodes) => {
                let mut last = Value::Nil;
                for node in nodes {
                    last = self.eval(node, env)?;
                }
                Ok(last)
            }

            Node::VarRef(name) => self.lookup_variable(*name, env),

            Node::VarAssign { name, value } => {
                let value = self.eval(value, env)?;
                env.assign(*name, value.clone());
                Ok(value)
            }

            Node::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(cond, env)?.is_truthy() {
                    self.eval(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.eval(else_branch, env)
                } else {
                    Ok(Value::Nil)
                }
            }

            Node::While { cond, body } => {
                while self.eval(cond, env)?.is_truthy() {
                    self.eval(body, env)?;
                }
                Ok(Value::Nil)
            }

            Node::FuncCall { name, args } => self.eval_call(*name, args, env),

            Node::FuncDef { name, params, body } => {
                self.define_function(FunctionDef {
                    name: *name,
                    params,
                    body,
                });
                Ok(Value::Nil)
            }

            Node::AryNew(items) => self.eval_array_literal(items, env),
            Node::AryRef { collection, index } => self.eval_index(collection, index, env),
            Node::AryAssign {
                collection,
                index,
                value,
            } => self.eval_index_assign(collection, index, value, env),
            Node::HashNew(pairs) => self.eval_hash_literal(pairs, env),

            Node::Unknown { tag } => Err(unknown_node_kind(tag)),
        }
    }

    /// Unbound names read as `nil` unless strict mode is on.
    fn lookup_variable(&self, name: Name, env: &Environment) -> EvalResult {
        match env.lookup(name) {
            Some(value) => Ok(value.clone()),
            None if self.config.strict_variables => {
                Err(undefined_variable(self.interner.lookup(name)))
            }
            None => Ok(Value::Nil),
        }
    }

    fn define_function(&mut self, def: FunctionDef<'a>) {
        let name = self.interner.lookup(def.name);
        if self.functions.define(def).is_some() {
            tracing::debug!(name, params = def.params.len(), "function redefined");
        } else {
            tracing::debug!(name, params = def.params.len(), "function defined");
        }
    }

    /// Is a user function called `name` currently defined?
    pub fn is_defined(&self, name: &str) -> bool {
        self.interner
            .get(name)
            .is_some_and(|name| self.functions.contains(name))
    }

    /// The configured print handler.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }
}
