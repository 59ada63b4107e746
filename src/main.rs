//! wordcase CLI - Convert text between word case conventions.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordcase::{CaseOptions, Config, Convention, Converter};

/// Convert text between word case conventions, preserving acronyms.
#[derive(Parser, Debug)]
#[command(name = "wordcase")]
#[command(version, about, long_about = None)]
struct Args {
    /// Target case: camel, pascal, snake, kebab, constant, header, path,
    /// sentence or title.
    #[arg(value_name = "CASE")]
    case: Convention,

    /// Text to convert, one result per argument. Reads lines from stdin when
    /// omitted.
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Acronym to preserve (repeatable).
    #[arg(short, long = "acronym", value_name = "NAME")]
    acronyms: Vec<String>,

    /// Separator to join words with instead of the case's default.
    #[arg(short, long)]
    separator: Option<String>,

    /// Path to a configuration file (default: discover .wordcase.toml).
    #[arg(long, value_name = "FILE", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Do not load any configuration file.
    #[arg(long)]
    no_config: bool,

    /// Read input from stdin.
    #[arg(long)]
    stdin: bool,

    /// Print debug logs to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let converter = Converter::from_config(&config);
    converter.acronym(&args.acronyms);

    let mut options = CaseOptions::new();
    options.separator = args.separator.clone();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.stdin || args.texts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Error reading stdin: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let output = converter.convert(args.case, &line, &options);
            if let Err(e) = writeln!(out, "{}", output) {
                eprintln!("Error writing output: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    for text in &args.texts {
        let output = converter.convert(args.case, text, &options);
        if let Err(e) = writeln!(out, "{}", output) {
            eprintln!("Error writing output: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<Config, String> {
    if args.no_config {
        return Ok(Config::default());
    }

    if let Some(path) = &args.config {
        return Config::from_file(path).map_err(|e| format!("Error loading config: {}", e));
    }

    let cwd = std::env::current_dir()
        .map_err(|e| format!("Error getting current directory: {}", e))?;
    match Config::discover(&cwd) {
        Ok(Some((_, config))) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => Err(format!("Error loading config: {}", e)),
    }
}
