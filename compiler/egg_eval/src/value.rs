//! Runtime values.
//!
//! `Value` is a closed sum type; built-ins check the variant they need at
//! their boundary. Everything heap-backed is behind `Rc`, so cloning a value
//! is cheap and arrays and closures are shared rather than copied.
//!
//! Only `Bool(false)` is falsy. `0`, `""` and empty arrays are all true.

use std::fmt;
use std::mem;
use std::rc::Rc;

use egg_ir::{format_number, Expression, Literal, Name};
use egg_stack::ensure_sufficient_stack;

use crate::{Builtin, Environment};

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    /// Double-precision number.
    Number(f64),
    /// Text.
    Text(Rc<str>),
    /// `true` or `false`.
    Bool(bool),
    /// Ordered sequence of values.
    Array(Rc<Vec<Value>>),
    /// Closure created by `fun`.
    Function(FunctionValue),
    /// Host-provided procedure from the global scope.
    Builtin(Builtin),
}

impl Value {
    /// Text value.
    pub fn text(s: &str) -> Self {
        Value::Text(Rc::from(s))
    }

    /// Array value holding `items` in order.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(items))
    }

    /// The value a literal evaluates to.
    pub fn from_literal(lit: &Literal) -> Self {
        match lit {
            Literal::Number(n) => Value::Number(*n),
            Literal::Text(s) => Value::Text(Rc::clone(s)),
        }
    }

    /// Truthiness for `if` and `while`: everything except `false`.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    /// The number inside, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
            Value::Builtin(_) => "native function",
        }
    }

    /// A description naming both kind and content, such as `number 5` or
    /// `text "abc"`.
    pub fn describe(&self) -> String {
        match self {
            Value::Number(_) | Value::Text(_) | Value::Bool(_) => {
                format!("{} {}", self.type_name(), Nested(self))
            }
            Value::Array(items) => format!("array of length {}", items.len()),
            Value::Function(_) | Value::Builtin(_) => self.to_string(),
        }
    }

    /// Equality as seen by the Egg `==` built-in.
    ///
    /// Numbers, text and booleans compare by value; arrays, functions and
    /// built-ins compare by identity; different variants are never equal.
    #[expect(clippy::float_cmp, reason = "Egg `==` is IEEE equality")]
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Structural equality for Rust-side comparisons (tests, embedders).
///
/// Unlike [`Value::strict_equals`], arrays compare element by element.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => self.strict_equals(other),
        })
    }
}

// Nested arrays are freed with a worklist. An array still shared elsewhere
// is only released, not emptied.
impl Drop for Value {
    fn drop(&mut self) {
        let Value::Array(items) = self else {
            return;
        };
        let Some(items) = Rc::get_mut(items) else {
            return;
        };
        if !items.iter().any(|item| matches!(item, Value::Array(_))) {
            return;
        }
        let mut pending = mem::take(items);
        while let Some(mut value) = pending.pop() {
            if let Value::Array(inner) = &mut value {
                if let Some(inner) = Rc::get_mut(inner) {
                    pending.append(inner);
                }
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Text(s) => write!(f, "Text({s:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Array(items) => f.debug_tuple("Array").field(&**items).finish(),
            Value::Function(func) => write!(f, "{func:?}"),
            Value::Builtin(b) => write!(f, "Builtin({b:?})"),
        })
    }
}

/// The form `print` writes: text is shown raw.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            other => write!(f, "{}", Nested(other)),
        }
    }
}

/// Display used inside arrays, where text is quoted.
struct Nested<'a>(&'a Value);

impl fmt::Display for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self.0 {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Text(s) => write!(f, "\"{s}\""),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Nested(item))?;
                }
                f.write_str("]")
            }
            Value::Function(func) => {
                f.write_str("<function(")?;
                for (i, param) in func.params().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                f.write_str(")>")
            }
            Value::Builtin(b) => write!(f, "<native {}>", b.name()),
        })
    }
}

/// A closure: parameter names, a body, and the scope it was created in.
///
/// The captured environment stays alive for as long as any clone of the
/// function does.
#[derive(Clone)]
pub struct FunctionValue(Rc<Closure>);

struct Closure {
    params: Vec<Name>,
    body: Expression,
    env: Environment,
}

impl FunctionValue {
    /// Create a closure over `env`.
    pub fn new(params: Vec<Name>, body: Expression, env: Environment) -> Self {
        FunctionValue(Rc::new(Closure { params, body, env }))
    }

    /// Parameter names, in declaration order.
    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.0.params
    }

    /// The body expression.
    #[inline]
    pub fn body(&self) -> &Expression {
        &self.0.body
    }

    /// The defining environment.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.0.env
    }

    /// Whether both handles refer to the same closure.
    #[inline]
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// The captured environment is left out: it usually contains the function.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.0.params)
            .field("body", &format_args!("{}", self.0.body))
            .finish_non_exhaustive()
    }
}
