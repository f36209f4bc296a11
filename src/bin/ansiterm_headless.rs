//! ansiterm Headless Runner
//!
//! Feeds a captured byte stream through the terminal and prints the
//! resulting screen. Reads from stdin or a file.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use ansiterm::parser::ParseMode;
use ansiterm::{Config, Terminal};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// CLI arguments for the headless runner
#[derive(Parser, Debug, Clone)]
#[command(name = "ansiterm-headless")]
#[command(version)]
#[command(about = "Feed a captured byte stream through ansiterm and print the screen", long_about = None)]
#[command(after_help = "If no input file is specified, reads from stdin.

Examples:
  printf 'Hello\\x1b[31mWorld\\x1b[0m' | ansiterm-headless
  ansiterm-headless -r 25 -c 80 --lenient session.bin
  ansiterm-headless --json < session.bin > snapshot.json")]
struct Args {
    /// Terminal height (default: 24)
    #[arg(short, long, value_name = "N")]
    rows: Option<usize>,

    /// Terminal width (default: 80)
    #[arg(short, long, value_name = "N")]
    cols: Option<usize>,

    /// Skip unrecognized escape bytes instead of failing
    #[arg(short, long)]
    lenient: bool,

    /// Load settings from a JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH", conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Input file (same as --file)
    #[arg(value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Output snapshot as JSON
    #[arg(short, long, conflicts_with = "text")]
    json: bool,

    /// Output snapshot as text (default)
    #[arg(short, long)]
    text: bool,
}

impl Args {
    fn input_file(&self) -> Option<&PathBuf> {
        self.file.as_ref().or(self.input.as_ref())
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Apply command line overrides on top of a loaded config
    fn apply_to(&self, config: &mut Config) {
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if self.lenient {
            config.mode = ParseMode::Lenient;
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::load_or_default(),
    };
    args.apply_to(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let input_data = match args.input_file() {
        Some(path) => match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut data = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut data) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            data
        }
    };

    let mut term = Terminal::from_config(&config);
    tracing::info!(
        rows = config.rows,
        cols = config.cols,
        mode = ?config.mode,
        bytes = input_data.len(),
        "feeding input"
    );
    if let Err(e) = term.feed(&input_data) {
        eprintln!("Error feeding input: {}", e);
        return ExitCode::FAILURE;
    }

    let snapshot = term.snapshot();
    match args.output_format() {
        OutputFormat::Text => {
            println!("Terminal State ({}x{}):", config.rows, config.cols);
            println!("Cursor: ({}, {})", snapshot.cursor.row, snapshot.cursor.col);
            println!("---");
            print!("{}", snapshot.to_text());
            println!("---");
        }
        OutputFormat::Json => match snapshot.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}
