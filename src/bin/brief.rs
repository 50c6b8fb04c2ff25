//! Command-line interface for brief
//! This binary structures raw model-output files into citation-aware briefs.
//!
//! Usage:
//!   brief parse `<path>` [--format `<format>`] [--sources `<path>`]  - Structure a raw output file
//!   brief tokens `<path>`                                        - Dump the inline token stream
//!   brief list-formats                                         - List available output formats

use clap::{Arg, Command};

use brief::brief::ast::{BriefResponse, SourceRecord};
use brief::brief::formats::{render_response, render_tokens, OutputFormat};
use brief::brief::inlines::tokenize_inlines;
use brief::brief::pipeline::parse_brief;

fn main() {
    let matches = Command::new("brief")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for structuring model-generated research briefs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Structure a raw model-output file into a brief")
                .arg(
                    Arg::new("path")
                        .help("Path to the raw model-output file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json', 'yaml', 'plain')")
                        .default_value("json"),
                )
                .arg(
                    Arg::new("sources")
                        .long("sources")
                        .short('s')
                        .help("Path to a JSON array of source records to resolve citations against"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the inline token stream of a text file as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the text file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            let sources = parse_matches.get_one::<String>("sources");
            handle_parse_command(path, format, sources.map(String::as_str));
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            handle_tokens_command(path);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str, sources_path: Option<&str>) {
    let format = OutputFormat::from_name(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let raw = read_file(path);
    let sources = match sources_path {
        Some(sources_path) => load_sources(sources_path),
        None => Vec::new(),
    };

    let response = BriefResponse::from_brief(parse_brief(&raw), sources);
    let output = render_response(&response, format).unwrap_or_else(|e| {
        eprintln!("Error rendering output: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let text = read_file(path);
    let tokens = tokenize_inlines(&text);
    let output = render_tokens(&tokens).unwrap_or_else(|e| {
        eprintln!("Error rendering tokens: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for name in OutputFormat::names() {
        println!("  {}", name);
    }
}

fn read_file(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

fn load_sources(path: &str) -> Vec<SourceRecord> {
    let content = read_file(path);
    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing sources file: {}", e);
        std::process::exit(1);
    })
}
