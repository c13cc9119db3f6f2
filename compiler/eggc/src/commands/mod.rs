//! Command handlers for the `egg` CLI.
//!
//! Shared helpers (`read_file`, `report_error`) live here in the module root.

mod debug;
mod repl;
mod run;

pub use debug::parse_file;
pub use repl::run_repl;
pub use run::{eval_source, run_file};

/// Read a source file, exiting with a message on failure.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn report_error(err: &eggc::Error) {
    eprintln!("error: {err}");
}
