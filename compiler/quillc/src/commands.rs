//! Command handlers for the Quill CLI.

use quill_lexer::{Lexer, LexError};
use tracing::debug;

/// Lex a file and display the token stream.
///
/// Prints one line per token (the EOF token included) and a final count.
/// Fatal errors — an unopenable file or a failing read — go to stderr
/// with exit code 1; malformed input never fails, per the scanner's
/// recovery contract.
pub fn lex_file(path: &str, capacity: Option<usize>) {
    let lexer = match capacity {
        Some(n) => {
            debug!("lexing '{path}' with block capacity {n}");
            Lexer::from_path_with_capacity(path, n)
        }
        None => Lexer::from_path(path),
    };

    let mut lexer = match lexer {
        Ok(lexer) => lexer,
        Err(e) => exit_with_error(&e),
    };

    println!("Tokens for '{path}':");
    let mut count = 0usize;
    loop {
        let tok = match lexer.next_token() {
            Ok(tok) => tok,
            Err(e) => exit_with_error(&e),
        };
        println!("  {tok}");
        count += 1;
        if tok.is_eof() {
            break;
        }
    }
    println!("Analysis complete. Found {count} tokens.");
}

fn exit_with_error(error: &LexError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}
