//! The `parse` command, for inspecting the syntax tree.

use egg_ir::Expression;

use super::{read_file, report_error};

/// Parse a file and print its syntax tree.
///
/// Prints the canonical source form by default, or the full `Debug` tree
/// when `debug` is set.
pub fn parse_file(path: &str, debug: bool) {
    let content = read_file(path);
    let expr: Expression = match egg_parse::parse(&content) {
        Ok(expr) => expr,
        Err(err) => {
            report_error(&eggc::Error::from(err));
            std::process::exit(1);
        }
    };
    if debug {
        println!("{expr:#?}");
    } else {
        println!("{expr}");
    }
}
