//! The Egg syntax tree.

use std::fmt;
use std::mem;
use std::rc::Rc;

use egg_stack::ensure_sufficient_stack;

use crate::number::format_number;
use crate::Name;

/// Payload of a literal expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// A decimal numeral such as `42`.
    Number(f64),
    /// A quoted string such as `"hello"` (no escapes).
    Text(Rc<str>),
}

/// A parsed Egg expression.
///
/// Closed over three variants. Every construct of the language, including
/// control flow and function definition, is an `Apply` whose operator
/// happens to be a special-form word.
///
/// Nesting depth is unbounded. Comparison, formatting and drop do not
/// recurse on the host stack without growing it.
#[derive(Clone)]
pub enum Expression {
    /// A literal that evaluates to itself.
    Value(Literal),
    /// A reference to a binding.
    Word(Name),
    /// Application of `operator` to `args`.
    ///
    /// The operator is any expression, so `f(x)(y)` is an `Apply` whose
    /// operator is the `Apply` for `f(x)`.
    Apply {
        operator: Rc<Expression>,
        args: Rc<[Expression]>,
    },
}

impl Expression {
    /// A number literal.
    pub fn number(n: f64) -> Self {
        Expression::Value(Literal::Number(n))
    }

    /// A text literal.
    pub fn text(s: &str) -> Self {
        Expression::Value(Literal::Text(Rc::from(s)))
    }

    /// A word.
    pub fn word(name: &str) -> Self {
        Expression::Word(Name::new(name))
    }

    /// Application of `operator` to `args`.
    pub fn apply(operator: Expression, args: Vec<Expression>) -> Self {
        Expression::Apply {
            operator: Rc::new(operator),
            args: Rc::from(args),
        }
    }

    /// The name of this expression if it is a `Word`.
    pub fn as_word(&self) -> Option<&Name> {
        match self {
            Expression::Word(name) => Some(name),
            _ => None,
        }
    }

    #[inline]
    fn is_apply(&self) -> bool {
        matches!(self, Expression::Apply { .. })
    }

    /// Move this node's uniquely owned `Apply` children into `out`,
    /// leaving leaves in their place.
    fn detach_children(&mut self, out: &mut Vec<Expression>) {
        let Expression::Apply { operator, args } = self else {
            return;
        };
        if let Some(op) = Rc::get_mut(operator).filter(|op| op.is_apply()) {
            out.push(mem::replace(op, Expression::number(0.0)));
        }
        if let Some(args) = Rc::get_mut(args) {
            for arg in args.iter_mut().filter(|arg| arg.is_apply()) {
                out.push(mem::replace(arg, Expression::number(0.0)));
            }
        }
    }
}

// Frees the tree with a worklist. Subtrees still shared with a clone are
// left to their last owner.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Expression::Value(a), Expression::Value(b)) => a == b,
            (Expression::Word(a), Expression::Word(b)) => a == b,
            (
                Expression::Apply {
                    operator: op_a,
                    args: args_a,
                },
                Expression::Apply {
                    operator: op_b,
                    args: args_b,
                },
            ) => op_a == op_b && args_a == args_b,
            _ => false,
        })
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expression::Value(lit) => f.debug_tuple("Value").field(lit).finish(),
            Expression::Word(name) => f.debug_tuple("Word").field(name).finish(),
            Expression::Apply { operator, args } => f
                .debug_struct("Apply")
                .field("operator", operator)
                .field("args", args)
                .finish(),
        })
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => f.write_str(&format_number(*n)),
            Literal::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Prints the expression back in source form: `+(a, 10)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expression::Value(lit) => write!(f, "{lit}"),
            Expression::Word(name) => write!(f, "{name}"),
            Expression::Apply { operator, args } => {
                write!(f, "{operator}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        })
    }
}
