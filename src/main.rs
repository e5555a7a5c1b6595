//! CLI tool to list tokens and lexical diagnostics for source files.

use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: portugol-lex <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  List the tokens of each file");
        eprintln!("  check   Report lexical diagnostics only");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  portugol-lex tokens programa.txt");
        eprintln!("  portugol-lex check programa.txt");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        let analysis = portugol_lexer::tokenize(&content);

        match command {
            "tokens" => {
                for token in &analysis.tokens {
                    println!("{token}");
                }
                for diagnostic in &analysis.diagnostics {
                    eprintln!("{path}: {diagnostic}");
                }
                if !analysis.is_clean() {
                    had_error = true;
                }
            }
            "check" => {
                if analysis.is_clean() {
                    let tokens = analysis.tokens.len();
                    eprintln!("{path}: clean ({tokens} token(s))");
                } else {
                    for diagnostic in &analysis.diagnostics {
                        eprintln!("{path}: {diagnostic}");
                    }
                    had_error = true;
                }
            }
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
