//! `lstr` CLI.

use lstr::commands::{lex_file, lines_file, utf8_file};

fn main() {
    lstr::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" | "lines" | "utf8" => {
            let Some(path) = args.get(2) else {
                eprintln!("error: missing file path");
                eprintln!("Usage: lstr {command} <file>");
                std::process::exit(1);
            };
            match command.as_str() {
                "lex" => lex_file(path),
                "lines" => lines_file(path),
                _ => utf8_file(path),
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("lstr {}", env!("CARGO_PKG_VERSION"));
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
    println!("lstr: byte-string and tokenizer toolkit");
    println!();
    println!("Usage: lstr <command> [file]");
    println!();
    println!("Commands:");
    println!("  lex <file>      Tokenize and display tokens");
    println!("  lines <file>    Split into numbered lines");
    println!("  utf8 <file>     Report byte size and codepoint count");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=lstr_lexer=trace   Trace every token");
    println!("  RUST_LOG=lstr_core=debug    Trace buffer growth");
}
