use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "translator",
    about = "Load a key:value seed file and look up translations",
    version
)]
pub struct Cli {
    /// Seed file with one `<key>:<value>` entry per line
    pub seed_file: PathBuf,

    /// Print every loaded entry in key order instead of reading lookups from stdin
    #[arg(value_enum)]
    pub mode: Option<Mode>,

    /// Log progress to stderr (RUST_LOG refines the level)
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log output, even when RUST_LOG is set
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print all entries as `<key>:<value>`, one per line
    Display,
}
