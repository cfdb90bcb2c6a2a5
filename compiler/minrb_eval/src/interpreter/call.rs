//! Function call evaluation methods for the Interpreter.

use minrb_ir::{Name, Node};

use super::Interpreter;
use crate::builtins::{p_result, to_integer, Builtin};
use crate::errors::{arity_mismatch, output_error, stack_overflow, unknown_function};
use crate::registry::FunctionDef;
use crate::{Environment, EvalResult, Value};

impl<'a> Interpreter<'a> {
    /// Evaluate `name(args...)`.
    ///
    /// User functions take precedence over builtins of the same name.
    pub(super) fn eval_call(
        &mut self,
        name: Name,
        args: &'a [Node],
        env: &mut Environment,
    ) -> EvalResult {
        if let Some(def) = self.functions.get(name) {
            return self.call_function(def, args, env);
        }
        let text = self.interner.lookup(name);
        match Builtin::from_name(text) {
            Some(builtin) => self.call_builtin(builtin, args, env),
            None => Err(unknown_function(text)),
        }
    }

    /// Call a user function.
    ///
    /// The body runs in a copy of the caller's environment taken before any
    /// argument is evaluated. Each argument is evaluated in the caller's own
    /// environment, so it never sees the parameters bound before it. Surplus
    /// arguments are not evaluated; missing ones leave the parameter unbound.
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.interner.lookup(def.name)))]
    fn call_function(
        &mut self,
        def: FunctionDef<'a>,
        args: &'a [Node],
        env: &mut Environment,
    ) -> EvalResult {
        if let Some(limit) = self.config.max_call_depth {
            if self.call_depth >= limit {
                return Err(stack_overflow(limit));
            }
        }

        let mut callee_env = env.fork();
        for (&param, arg) in def.params.iter().zip(args) {
            let value = self.eval(arg, env)?;
            callee_env.assign(param, value);
        }

        self.call_depth += 1;
        let result = self.eval(def.body, &mut callee_env);
        self.call_depth -= 1;

        result.map_err(|err| err.with_frame(self.interner.lookup(def.name)))
    }

    fn call_builtin(
        &mut self,
        builtin: Builtin,
        args: &'a [Node],
        env: &mut Environment,
    ) -> EvalResult {
        tracing::trace!(builtin = builtin.name(), args = args.len(), "builtin call");
        match builtin {
            Builtin::P => {
                let values = args
                    .iter()
                    .map(|arg| self.eval(arg, env))
                    .collect::<Result<Vec<Value>, _>>()?;
                for value in &values {
                    self.print_handler
                        .println(&value.inspect())
                        .map_err(|err| output_error(&err))?;
                }
                Ok(p_result(values))
            }
            Builtin::Integer => {
                let [arg] = args else {
                    return Err(arity_mismatch(builtin.name(), 1, args.len()));
                };
                let value = self.eval(arg, env)?;
                to_integer(&value)
            }
        }
    }
}
