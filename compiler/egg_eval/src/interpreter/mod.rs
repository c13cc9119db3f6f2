//! Tree-walking interpreter.
//!
//! Evaluation is a structural recursion over [`Expression`]:
//!
//! - `Value` evaluates to its literal
//! - `Word` is looked up through the environment chain
//! - `Apply` is either a special form (arguments unevaluated) or a call
//!
//! For a call, the operator is evaluated and checked for callability before
//! any argument is evaluated. Arguments then run left to right.

mod builder;

pub use builder::InterpreterBuilder;

use egg_ir::Expression;
use egg_stack::ensure_sufficient_stack;

use crate::errors::{not_callable, undefined_variable, wrong_arg_count, EvalResult};
use crate::print_handler::SharedPrintHandler;
use crate::{Arity, Environment, SpecialForm, Value};

/// Evaluates Egg expressions.
///
/// Holds configuration only; all program state lives in the
/// [`Environment`] passed to [`Interpreter::evaluate`].
pub struct Interpreter {
    pub(crate) print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter that prints to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The handler `print` writes to.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate `expr` in `env`.
    pub fn evaluate(&self, expr: &Expression, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| match expr {
            Expression::Value(lit) => Ok(Value::from_literal(lit)),
            Expression::Word(name) => env
                .lookup(name.as_str())
                .ok_or_else(|| undefined_variable(name)),
            Expression::Apply { operator, args } => {
                if let Some(form) = operator
                    .as_word()
                    .and_then(|name| SpecialForm::from_name(name.as_str()))
                {
                    return self.eval_special_form(form, args, env);
                }
                let callee = self.evaluate(operator, env)?;
                if !matches!(callee, Value::Function(_) | Value::Builtin(_)) {
                    return Err(not_callable(&callee));
                }
                let values = args
                    .iter()
                    .map(|arg| self.evaluate(arg, env))
                    .collect::<EvalResult<Vec<_>>>()?;
                self.apply(&callee, values)
            }
        })
    }

    /// Invoke a callable on evaluated arguments.
    ///
    /// A function call binds its parameters in a fresh scope whose parent is
    /// the function's captured environment, then evaluates the body there.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = %callee, args = args.len()))]
    pub fn apply(&self, callee: &Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Function(func) => {
                if func.params().len() != args.len() {
                    return Err(wrong_arg_count(callee, func.params().len(), args.len()));
                }
                let frame = func.env().child();
                for (param, arg) in func.params().iter().zip(args) {
                    frame.define(param.clone(), arg);
                }
                self.evaluate(func.body(), &frame)
            }
            Value::Builtin(builtin) => {
                if let Arity::Exact(expected) = builtin.arity() {
                    if expected != args.len() {
                        return Err(wrong_arg_count(callee, expected, args.len()));
                    }
                }
                builtin.call(&args, &self.print_handler)
            }
            other => Err(not_callable(other)),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate `expr` in `env` with a stdout-printing interpreter.
pub fn evaluate(expr: &Expression, env: &Environment) -> EvalResult {
    Interpreter::new().evaluate(expr, env)
}

#[cfg(test)]
mod tests;
