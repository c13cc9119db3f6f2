//! Built-in procedures and the global environment.
//!
//! Built-ins receive already-evaluated arguments. Arity is checked by the
//! caller (see `Interpreter::apply`) before `call` runs, so `call` may index
//! `args` directly for fixed-arity built-ins.

use egg_ir::Name;

use crate::errors::{index_out_of_bounds, wrong_arg_type, EvalResult};
use crate::print_handler::PrintHandlerImpl;
use crate::{Environment, Value};

/// How many arguments a callable accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

/// A host-provided procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Lt,
    Gt,
    Print,
    Array,
    Length,
    Element,
}

impl Builtin {
    /// Every built-in, in the order they are installed.
    pub const ALL: [Builtin; 11] = [
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Eq,
        Builtin::Lt,
        Builtin::Gt,
        Builtin::Print,
        Builtin::Array,
        Builtin::Length,
        Builtin::Element,
    ];

    /// The global name this built-in is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Eq => "==",
            Builtin::Lt => "<",
            Builtin::Gt => ">",
            Builtin::Print => "print",
            Builtin::Array => "array",
            Builtin::Length => "length",
            Builtin::Element => "element",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Builtin::Add
            | Builtin::Sub
            | Builtin::Mul
            | Builtin::Div
            | Builtin::Eq
            | Builtin::Lt
            | Builtin::Gt
            | Builtin::Element => Arity::Exact(2),
            Builtin::Print | Builtin::Length => Arity::Exact(1),
            Builtin::Array => Arity::Variadic,
        }
    }

    /// Run the built-in on evaluated arguments.
    ///
    /// `args.len()` must satisfy [`Builtin::arity`].
    pub fn call(self, args: &[Value], out: &PrintHandlerImpl) -> EvalResult {
        match self {
            Builtin::Add => arithmetic(self, args, |a, b| a + b),
            Builtin::Sub => arithmetic(self, args, |a, b| a - b),
            Builtin::Mul => arithmetic(self, args, |a, b| a * b),
            Builtin::Div => arithmetic(self, args, |a, b| a / b),
            Builtin::Lt => comparison(self, args, |a, b| a < b),
            Builtin::Gt => comparison(self, args, |a, b| a > b),
            Builtin::Eq => Ok(Value::Bool(args[0].strict_equals(&args[1]))),
            Builtin::Print => {
                out.println(&args[0].to_string());
                Ok(args[0].clone())
            }
            Builtin::Array => Ok(Value::array(args.to_vec())),
            Builtin::Length => match &args[0] {
                Value::Array(items) => Ok(Value::Number(length_as_number(items.len()))),
                other => Err(wrong_arg_type("length", "an array", other)),
            },
            Builtin::Element => element(&args[0], &args[1]),
        }
    }
}

fn number_arg(op: Builtin, value: &Value) -> EvalResult<f64> {
    value
        .as_number()
        .ok_or_else(|| wrong_arg_type(op.name(), "a number", value))
}

fn arithmetic(op: Builtin, args: &[Value], f: impl FnOnce(f64, f64) -> f64) -> EvalResult {
    let a = number_arg(op, &args[0])?;
    let b = number_arg(op, &args[1])?;
    Ok(Value::Number(f(a, b)))
}

fn comparison(op: Builtin, args: &[Value], f: impl FnOnce(f64, f64) -> bool) -> EvalResult {
    let a = number_arg(op, &args[0])?;
    let b = number_arg(op, &args[1])?;
    Ok(Value::Bool(f(a, b)))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "arrays never approach 2^53 elements"
)]
fn length_as_number(len: usize) -> f64 {
    len as f64
}

fn element(array: &Value, index: &Value) -> EvalResult {
    let Value::Array(items) = array else {
        return Err(wrong_arg_type("element", "an array", array));
    };
    let i = number_arg(Builtin::Element, index)?;
    if i.fract() != 0.0 || i < 0.0 || i >= length_as_number(items.len()) {
        return Err(index_out_of_bounds(i, items.len()));
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "bounds-checked non-negative integer above"
    )]
    let idx = i as usize;
    Ok(items[idx].clone())
}

/// A fresh root environment holding `true`, `false` and every built-in.
pub fn global_environment() -> Environment {
    let env = Environment::new();
    env.define(Name::new("true"), Value::Bool(true));
    env.define(Name::new("false"), Value::Bool(false));
    for builtin in Builtin::ALL {
        env.define(Name::new(builtin.name()), Value::Builtin(builtin));
    }
    env
}
