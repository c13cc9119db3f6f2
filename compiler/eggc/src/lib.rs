//! The Egg interpreter.
//!
//! Ties the parser and evaluator together: source text in, [`Value`] out.
//!
//! ```text
//! let value = eggc::run_program(&["do(define(x, 4),", "print(x))"])?;
//! ```

use std::sync::Once;

use egg_eval::{global_environment, Environment, Interpreter};
use egg_parse::ParseError;

pub use egg_eval::{ErrorKind, EvalError, Value};

/// Any failure while running a program.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(_) => ErrorKind::Syntax,
            Error::Eval(err) => err.kind(),
        }
    }
}

/// Run a program given as lines of source text, printing to stdout.
///
/// The lines are joined with `\n` and evaluated in a fresh scope whose
/// parent is the global environment.
pub fn run_program(lines: &[&str]) -> Result<Value, Error> {
    run_source(&lines.join("\n"), &Interpreter::new())
}

/// Run `source` as one program with the given interpreter.
pub fn run_source(source: &str, interpreter: &Interpreter) -> Result<Value, Error> {
    run_in(source, interpreter, &global_environment().child())
}

/// Run `source` in an existing top-level environment.
///
/// Definitions made by the program stay visible in `env` afterwards.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_in(source: &str, interpreter: &Interpreter, env: &Environment) -> Result<Value, Error> {
    let expr = egg_parse::parse(source)?;
    let value = interpreter.evaluate(&expr, env)?;
    tracing::debug!(result = %value, "program finished");
    Ok(value)
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
