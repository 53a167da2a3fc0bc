//! TryDo - Main Entry Point
//!
//! Command-line front end over the `trydo` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trydo::Config;
use trydo::handlers::{self, Command};

/// TryDo - nested to-do lists with reminders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding lists, preferences and pending reminders
    data_dir: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn install_tracing(verbose: bool) {
    // RUST_LOG wins over --verbose
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    install_tracing(args.verbose);

    let config = Config::new(&args.data_dir);
    let mut store = config.open_store();
    let output = handlers::run(args.command, &mut store)?;
    println!("{}", output.trim_end());
    Ok(())
}
