//! Quill compiler CLI.
//!
//! Only the lexing front end exists so far; `quill lex` dumps the token
//! stream for a source file.

mod commands;

use std::sync::Once;

use commands::lex_file;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=quillc=debug` or `RUST_LOG=quillc=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: quill lex <file.qll> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --capacity=<n>   Buffer block capacity in bytes (default 4096)");
                std::process::exit(1);
            }

            let mut capacity: Option<usize> = None;
            let mut path: Option<&str> = None;

            for arg in args.iter().skip(2) {
                if let Some(value) = arg.strip_prefix("--capacity=") {
                    match value.parse::<usize>() {
                        Ok(n) if n >= 1 => capacity = Some(n),
                        _ => {
                            eprintln!("error: --capacity expects a positive integer, got '{value}'");
                            std::process::exit(1);
                        }
                    }
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: quill lex <file.qll> [--capacity=<n>]");
                std::process::exit(1);
            };

            lex_file(path, capacity);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("quill {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Quill compiler");
    println!();
    println!("Usage: quill <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  lex <file.qll>    Tokenize a file and print the token stream");
    println!("  help              Show this help");
    println!("  version           Show version");
}
