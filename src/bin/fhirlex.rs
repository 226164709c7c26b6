//! Command-line tokenizer
//!
//! Prints the tokens of a FHIRPath, Mapping Language or `_filter` expression.

use clap::{Parser, Subcommand, ValueEnum};
use octofhir_fhirlex::{FHIRPATH, FILTER, Grammar, MAPPING, Token, TokenStream};
use std::fs;
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "fhirlex")]
#[command(about = "Tokenize FHIRPath, FHIR Mapping Language and _filter expressions")]
#[command(version)]
#[command(author = "OctoFHIR Team <funyloony@gmail.com>")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of an expression
    Tokenize {
        /// Expression to tokenize (reads from --file or stdin if not provided)
        expression: Option<String>,
        /// File containing the expression
        #[arg(short, long)]
        file: Option<String>,
        /// Grammar to tokenize with
        #[arg(short, long, value_enum, default_value_t = GrammarName::Fhirpath)]
        grammar: GrammarName,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Drop comment tokens
        #[arg(long)]
        no_comments: bool,
    },
    /// Check that an expression yields at least one token
    Check {
        /// Expression to check
        expression: String,
        /// Grammar to tokenize with
        #[arg(short, long, value_enum, default_value_t = GrammarName::Fhirpath)]
        grammar: GrammarName,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GrammarName {
    Fhirpath,
    Mapping,
    Filter,
}

impl GrammarName {
    fn grammar(self) -> &'static Grammar {
        match self {
            GrammarName::Fhirpath => &FHIRPATH,
            GrammarName::Mapping => &MAPPING,
            GrammarName::Filter => &FILTER,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Tokenize {
            expression,
            file,
            grammar,
            format,
            no_comments,
        } => {
            let input = read_input(expression, file.as_deref());
            handle_tokenize(&input, grammar.grammar(), format, no_comments);
        }
        Commands::Check {
            expression,
            grammar,
        } => {
            handle_check(&expression, grammar.grammar());
        }
    }
}

fn read_input(expression: Option<String>, file: Option<&str>) -> String {
    if let Some(expression) = expression {
        return expression;
    }

    if let Some(filename) = file {
        return match fs::read_to_string(filename) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{filename}': {e}");
                process::exit(1);
            }
        };
    }

    let mut buffer = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buffer) {
        eprintln!("Error reading from stdin: {e}");
        process::exit(1);
    }
    buffer
}

fn handle_tokenize(input: &str, grammar: &Grammar, format: OutputFormat, no_comments: bool) {
    log::debug!("tokenizing {} bytes with the {} grammar", input.len(), grammar.name);

    let tokens = grammar.tokenize(input);
    let tokens: Vec<Token> = if no_comments {
        TokenStream::without_comments(tokens).collect()
    } else {
        tokens
    };

    match format {
        OutputFormat::Table => {
            for token in &tokens {
                println!(
                    "{:>4}:{:<4} {:<10} {}",
                    token.line,
                    token.column,
                    token.id(),
                    token.value
                );
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing tokens: {e}");
                process::exit(1);
            }
        },
    }
}

fn handle_check(expression: &str, grammar: &Grammar) {
    match grammar.stream(expression) {
        Ok(stream) => println!("ok: {} tokens", stream.remaining().len()),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
