//! minrb CLI
//!
//! Evaluates programs handed over as JSON syntax trees.

use minrbc::commands::{parse_run_options, run_file};

fn main() {
    minrbc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(2);
    }

    let command = &args[1];

    match command.as_str() {
        "run" => match parse_run_options(&args[2..]) {
            Ok(options) => run_file(&options),
            Err(err) => {
                eprintln!("error: {err}");
                eprintln!("Usage: minrb run <ast.json|-> [--strict] [--max-depth=N]");
                std::process::exit(2);
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("minrb {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("minrb - evaluator for minrb syntax trees");
    println!();
    println!("Usage: minrb <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <ast.json|->     Evaluate a JSON syntax tree (- reads stdin)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --strict             Fail on reads of unbound variables");
    println!("  --max-depth=<n>      Fail once user calls nest deeper than n");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging to stderr (e.g. RUST_LOG=minrb_eval=debug)");
    println!();
    println!("Examples:");
    println!("  minrb run program.json");
    println!("  parser program.rb | minrb run - --strict");
}
