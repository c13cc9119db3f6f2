//! The `run` and `eval` commands.

use super::{read_file, report_error};

/// Run an Egg source file as one program.
///
/// The file's lines are joined with `\n`, so a trailing newline or CRLF line
/// endings do not change the program.
pub fn run_file(path: &str, show_result: bool) {
    let content = read_file(path);
    let lines: Vec<&str> = content.lines().collect();
    run_lines(&lines, show_result);
}

/// Run source text given on the command line.
pub fn eval_source(source: &str, show_result: bool) {
    run_lines(&[source], show_result);
}

fn run_lines(lines: &[&str], show_result: bool) {
    match eggc::run_program(lines) {
        Ok(value) => {
            if show_result {
                println!("{value}");
            }
        }
        Err(err) => {
            report_error(&err);
            std::process::exit(1);
        }
    }
}
