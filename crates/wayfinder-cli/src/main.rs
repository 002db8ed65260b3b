//! Wayfinder CLI - Command-line interface for the Wayfinder legal self-help engine.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wayfinder_cli::commands;
use wayfinder_cli::repl;
use wayfinder_cli::{Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> wayfinder_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // An explicit config path must load; the default one falls back quietly
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_init().unwrap_or_else(|e| {
            eprintln!("Ignoring unreadable config: {}", e);
            Config::default()
        }),
    };

    init_tracing(cli.verbose, &config.settings.log_filter);

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let engine = config.engine()?;

    match cli.command {
        None | Some(Command::Repl) => repl::run_repl(&engine, &config, &formatter)?,
        Some(Command::Classify(args)) => commands::execute_classify(args, &engine, &formatter)?,
        Some(Command::Route(args)) => commands::execute_route(args, &engine, &formatter)?,
        Some(Command::Authorities(args)) => {
            commands::execute_authorities(args, &engine, &formatter)?
        }
        Some(Command::Evidence(args)) => commands::execute_evidence(args, &formatter)?,
        Some(Command::Readability(args)) => commands::execute_readability(args, &formatter)?,
        Some(Command::Generate(args)) => commands::execute_generate(args, &engine, &formatter)?,
        Some(Command::Journey(args)) => commands::execute_journey(args, &formatter)?,
    }

    Ok(())
}

/// Log to stderr so JSON on stdout stays parseable.
///
/// `--verbose` forces debug; otherwise `RUST_LOG`, then the config's filter.
fn init_tracing(verbose: bool, fallback: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
