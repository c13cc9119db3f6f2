//! The `repl` command.
//!
//! Each input line is a whole program. All lines share one top-level
//! scope, so definitions carry over; an error is reported and the loop
//! goes on.

use std::io::{self, BufRead, Write};

use egg_eval::{global_environment, Interpreter};

use super::report_error;

pub fn run_repl() {
    let interpreter = Interpreter::new();
    let env = global_environment().child();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                println!();
                return;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("error: cannot read input: {e}");
                return;
            }
        }

        let source = line.trim();
        if source.is_empty() {
            continue;
        }
        match eggc::run_in(source, &interpreter, &env) {
            Ok(value) => println!("{value}"),
            Err(err) => report_error(&err),
        }
    }
}
