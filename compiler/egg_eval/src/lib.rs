//! Tree-walking evaluator for Egg.
//!
//! Programs are evaluated directly from the parsed [`egg_ir::Expression`]
//! tree against a chain of [`Environment`] scopes rooted at
//! [`global_environment`].

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod print_handler;
mod special_forms;
mod value;

pub use builtins::{global_environment, Arity, Builtin};
pub use environment::{AssignError, Environment};
pub use errors::{ErrorKind, EvalError, EvalResult};
pub use interpreter::{evaluate, Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use special_forms::SpecialForm;
pub use value::{FunctionValue, Value};
