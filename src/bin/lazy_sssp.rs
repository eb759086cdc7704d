use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lazy_sssp::config::{execute, OutputFormat, RunConfig};

/// Shortest distances and paths from one start vertex
#[derive(Parser, Debug)]
#[command(name = "lazy-sssp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON graph document (defaults to the built-in A-F sample graph)
    #[arg(long, short, env = "LAZY_SSSP_GRAPH")]
    graph: Option<PathBuf>,

    /// Start vertex
    #[arg(long, short, default_value = "A")]
    start: String,

    /// Only report these target vertices (repeatable)
    #[arg(long, short)]
    target: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log run details to stderr (RUST_LOG takes precedence)
    #[arg(long, short)]
    verbose: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            graph_path: cli.graph,
            start: cli.start,
            targets: cli.target,
            format: cli.format,
            color: !cli.no_color && std::io::stdout().is_terminal(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = RunConfig::from(cli);
    match execute(&config) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
