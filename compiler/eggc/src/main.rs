//! Egg interpreter CLI.

mod commands;

use commands::{eval_source, parse_file, run_file, run_repl};

fn main() {
    eggc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let mut show_result = false;
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--show-result" || arg == "-r" {
                    show_result = true;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: egg run <file.egg> [--show-result]");
                std::process::exit(1);
            };
            run_file(path, show_result);
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: egg eval <source>");
                std::process::exit(1);
            }
            eval_source(&args[2], true);
        }
        "parse" => {
            let mut debug = false;
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--debug" {
                    debug = true;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("Usage: egg parse <file.egg> [--debug]");
                std::process::exit(1);
            };
            parse_file(path, debug);
        }
        "repl" => run_repl(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("egg {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Egg interpreter");
    println!();
    println!("Usage: egg <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.egg>       Run an Egg program");
    println!("  eval <source>        Run source text and print its value");
    println!("  parse <file.egg>     Parse and print the syntax tree");
    println!("  repl                 Read and run programs line by line");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --show-result, -r    Print the program's final value");
    println!();
    println!("Parse options:");
    println!("  --debug              Print the full Debug tree");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=egg_eval=debug) to enable tracing on stderr.");
}
