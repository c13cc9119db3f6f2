//! Special forms: applications that see their arguments unevaluated.
//!
//! These are the only place control flow and binding live. They are
//! resolved by operator name before any lookup, so a user binding named
//! `if` can be defined but never called as a function.

use egg_ir::{Expression, Name};
use tracing::trace;

use crate::environment::AssignError;
use crate::errors::{bad_special_form, unknown_variable, EvalResult};
use crate::value::FunctionValue;
use crate::{Environment, Interpreter, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialForm {
    If,
    While,
    Do,
    Define,
    Set,
    Fun,
}

impl SpecialForm {
    /// Resolve an operator name to a special form.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "if" => Some(SpecialForm::If),
            "while" => Some(SpecialForm::While),
            "do" => Some(SpecialForm::Do),
            "define" => Some(SpecialForm::Define),
            "set" => Some(SpecialForm::Set),
            "fun" => Some(SpecialForm::Fun),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::If => "if",
            SpecialForm::While => "while",
            SpecialForm::Do => "do",
            SpecialForm::Define => "define",
            SpecialForm::Set => "set",
            SpecialForm::Fun => "fun",
        }
    }
}

impl Interpreter {
    /// Evaluate `form` applied to the raw `args`.
    pub(crate) fn eval_special_form(
        &self,
        form: SpecialForm,
        args: &[Expression],
        env: &Environment,
    ) -> EvalResult {
        trace!(form = form.name(), args = args.len(), "special form");
        match form {
            SpecialForm::If => self.eval_if(args, env),
            SpecialForm::While => self.eval_while(args, env),
            SpecialForm::Do => self.eval_do(args, env),
            SpecialForm::Define => self.eval_define(args, env),
            SpecialForm::Set => self.eval_set(args, env),
            SpecialForm::Fun => eval_fun(args, env),
        }
    }

    fn eval_if(&self, args: &[Expression], env: &Environment) -> EvalResult {
        let [cond, then_branch, else_branch] = args else {
            return Err(bad_special_form(SpecialForm::If, "expected 3 arguments"));
        };
        if self.evaluate(cond, env)?.is_truthy() {
            self.evaluate(then_branch, env)
        } else {
            self.evaluate(else_branch, env)
        }
    }

    fn eval_while(&self, args: &[Expression], env: &Environment) -> EvalResult {
        let [cond, body] = args else {
            return Err(bad_special_form(SpecialForm::While, "expected 2 arguments"));
        };
        while self.evaluate(cond, env)?.is_truthy() {
            self.evaluate(body, env)?;
        }
        Ok(Value::Bool(false))
    }

    fn eval_do(&self, args: &[Expression], env: &Environment) -> EvalResult {
        let mut result = Value::Bool(false);
        for arg in args {
            result = self.evaluate(arg, env)?;
        }
        Ok(result)
    }

    fn eval_define(&self, args: &[Expression], env: &Environment) -> EvalResult {
        let (name, value_expr) = binding_args(SpecialForm::Define, args)?;
        let value = self.evaluate(value_expr, env)?;
        env.define(name.clone(), value.clone());
        Ok(value)
    }

    fn eval_set(&self, args: &[Expression], env: &Environment) -> EvalResult {
        let (name, value_expr) = binding_args(SpecialForm::Set, args)?;
        let value = self.evaluate(value_expr, env)?;
        env.assign(name.as_str(), value.clone())
            .map_err(|AssignError::Undefined| unknown_variable(name))?;
        Ok(value)
    }
}

/// Shape check shared by `define` and `set`: a word and one expression.
fn binding_args(form: SpecialForm, args: &[Expression]) -> EvalResult<(&Name, &Expression)> {
    match args {
        [Expression::Word(name), value_expr] => Ok((name, value_expr)),
        [_, _] => Err(bad_special_form(form, "expected a word as the first argument")),
        _ => Err(bad_special_form(form, "expected 2 arguments")),
    }
}

fn eval_fun(args: &[Expression], env: &Environment) -> EvalResult {
    let Some((body, params)) = args.split_last() else {
        return Err(bad_special_form(SpecialForm::Fun, "missing function body"));
    };
    let params = params
        .iter()
        .map(|param| {
            param.as_word().cloned().ok_or_else(|| {
                bad_special_form(SpecialForm::Fun, "parameter names must be words")
            })
        })
        .collect::<EvalResult<Vec<Name>>>()?;
    Ok(Value::Function(FunctionValue::new(
        params,
        body.clone(),
        env.clone(),
    )))
}
