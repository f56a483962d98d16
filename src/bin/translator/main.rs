//! `translator` - load a `key:value` seed file into a [`Dictionary`] and look up keys.
//!
//! Usage:
//!   translator <SEED_FILE>            read lookups from stdin until end of input
//!   translator <SEED_FILE> display    print every entry in key order

mod cli;
mod error;
mod input;
mod seed;
mod session;

use std::io;

use clap::Parser;
use cli::{Cli, Mode};
use dict_tree::Dictionary;
use error::exit_with_error;
use tracing::info;

fn init_tracing(cli: &Cli) {
    // Tracing policy:
    //   --quiet   → "off", whatever RUST_LOG says
    //   --verbose → RUST_LOG if set, otherwise "info"
    //   default   → RUST_LOG if set, otherwise "off", so stderr stays clean for scripts
    let from_env = tracing_subscriber::EnvFilter::try_from_default_env();
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        from_env.unwrap_or_else(|_| "info".into())
    } else {
        from_env.unwrap_or_else(|_| "off".into())
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        exit_with_error(e);
    }
}

/// Loads the seed file and runs the selected mode. The dictionary is dropped before this
/// returns, on success and on failure alike.
fn run(cli: &Cli) -> error::CliResult<()> {
    let mut dictionary = Dictionary::new();

    info!(path = %cli.seed_file.display(), "reading seed file");
    let report = seed::load_file(&cli.seed_file, &mut dictionary)?;
    info!(
        loaded = report.loaded,
        skipped = report.skipped,
        entries = dictionary.element_count(),
        "seed file loaded"
    );

    let mut out = io::stdout().lock();
    match cli.mode {
        Some(Mode::Display) => session::display(&dictionary, &mut out),
        None => session::interactive(&dictionary, io::stdin().lock(), &mut out),
    }
}
