//! mdnav CLI - Markdown directory-tree documentation server.
//!
//! Provides commands for:
//! - `serve`: Start the documentation server
//! - `routes`: Print discovered routes as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RoutesArgs, ServeArgs};
use error::CliError;
use output::Output;

/// mdnav - Markdown directory-tree documentation server.
#[derive(Parser)]
#[command(name = "mdnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// Print discovered routes as JSON.
    Routes(RoutesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    init_tracing(matches!(&cli.command, Commands::Serve(args) if args.verbose));

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute())),
        Commands::Routes(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&err);
        std::process::exit(1);
    }
}

/// Log to stderr; `--verbose` means `info`, otherwise `RUST_LOG` decides.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
