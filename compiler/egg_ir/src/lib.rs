//! Egg IR - syntax tree types shared by the parser and the evaluator.
//!
//! - `Name`: an identifier, cheap to clone and hash
//! - `Literal`: the payload of a literal expression (number or text)
//! - `Expression`: the three-variant syntax tree
//!
//! Trees are immutable once built. `Apply` nodes keep their children behind
//! `Rc`, so cloning an `Expression` (for example, when a closure keeps its
//! body) never copies the subtree.

mod expr;
mod name;
mod number;

pub use expr::{Expression, Literal};
pub use name::Name;
pub use number::format_number;
