//! Evaluation errors.
//!
//! Every error aborts the whole program; nothing in the evaluator catches
//! and recovers. Constructors live here so that messages stay in one place.

use egg_ir::Name;

use crate::{SpecialForm, Value};

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Broad category of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed source or a special form used with the wrong shape.
    Syntax,
    /// An unbound name was read or assigned.
    Reference,
    /// A value of the wrong kind, or the wrong number of arguments.
    Type,
    /// An array index outside the array.
    Bounds,
}

/// An error raised while evaluating an expression.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("bad use of `{form}`: {reason}")]
    BadSpecialForm {
        form: &'static str,
        reason: &'static str,
    },
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: Name },
    #[error("setting unknown variable: {name}")]
    UnknownVariable { name: Name },
    #[error("applying a non-function: {found}")]
    NotCallable { found: String },
    #[error("{callee} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        callee: String,
        expected: usize,
        got: usize,
    },
    #[error("`{operation}` expects {expected}, got {found}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("index {index} out of bounds for array of length {length}")]
    IndexOutOfBounds { index: String, length: usize },
}

impl EvalError {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::BadSpecialForm { .. } => ErrorKind::Syntax,
            EvalError::UndefinedVariable { .. } | EvalError::UnknownVariable { .. } => {
                ErrorKind::Reference
            }
            EvalError::NotCallable { .. }
            | EvalError::ArityMismatch { .. }
            | EvalError::TypeMismatch { .. } => ErrorKind::Type,
            EvalError::IndexOutOfBounds { .. } => ErrorKind::Bounds,
        }
    }
}

pub fn bad_special_form(form: SpecialForm, reason: &'static str) -> EvalError {
    EvalError::BadSpecialForm {
        form: form.name(),
        reason,
    }
}

pub fn undefined_variable(name: &Name) -> EvalError {
    EvalError::UndefinedVariable { name: name.clone() }
}

pub fn unknown_variable(name: &Name) -> EvalError {
    EvalError::UnknownVariable { name: name.clone() }
}

pub fn not_callable(value: &Value) -> EvalError {
    EvalError::NotCallable {
        found: value.describe(),
    }
}

pub fn wrong_arg_count(callee: &Value, expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        callee: callee.describe(),
        expected,
        got,
    }
}

pub fn wrong_arg_type(operation: &'static str, expected: &'static str, found: &Value) -> EvalError {
    EvalError::TypeMismatch {
        operation,
        expected,
        found: found.describe(),
    }
}

pub fn index_out_of_bounds(index: f64, length: usize) -> EvalError {
    EvalError::IndexOutOfBounds {
        index: egg_ir::format_number(index),
        length,
    }
}
