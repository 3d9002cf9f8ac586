//! Command-line interface for the lume lexer
//!
//! Usage:
//!   lume tokens `<path>` [--format `<format>`] [--no-builtins] [--exclude `<module>`]
//!   lume detect `<path>`   - Check whether a file looks like lume source
//!   lume info              - Print the lexer's registration metadata

use clap::{Arg, ArgAction, Command};
use lume::lume::{detect, metadata};
use lume::{Lexer, LexerOptions};

fn main() {
    let matches = Command::new("lume")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for tokenizing and inspecting lume source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a file and print the token stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the lume file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('plain' or 'json')")
                        .default_value("plain"),
                )
                .arg(
                    Arg::new("no-builtins")
                        .long("no-builtins")
                        .help("Disable special classification of built-in names")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("exclude")
                        .long("exclude")
                        .help("Exclude a built-in module from classification (repeatable)")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("detect")
                .about("Check whether a file looks like lume source")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to sniff")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("info").about("Print the lexer's registration metadata as JSON"))
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            let options = LexerOptions {
                highlight_builtins: !sub.get_flag("no-builtins"),
                excluded_modules: sub
                    .get_many::<String>("exclude")
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default(),
            };
            handle_tokens_command(path, format, options);
        }
        Some(("detect", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_detect_command(path);
        }
        Some(("info", _)) => {
            handle_info_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str, options: LexerOptions) {
    let source = read_source(path);
    let lexer = Lexer::new(options);
    let tokens: Vec<_> = lexer.tokenize(&source).collect();

    match format {
        "plain" => {
            for token in &tokens {
                println!("{:<18} {:?}", format!("{:?}", token.kind), token.text);
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Unknown format '{}': expected 'plain' or 'json'", other);
            std::process::exit(1);
        }
    }
}

/// Handle the detect command
fn handle_detect_command(path: &str) {
    let source = read_source(path);
    if detect::looks_like_lume(&source) {
        println!("{}: lume", path);
    } else {
        println!("{}: not lume", path);
        std::process::exit(1);
    }
}

/// Handle the info command
fn handle_info_command() {
    let json = serde_json::to_string_pretty(&metadata::LEXER).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}
