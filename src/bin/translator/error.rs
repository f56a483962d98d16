use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use std::process;

/// Exit code for every runtime failure. Usage errors are reported by clap with code 2.
pub const EXIT_ERROR: i32 = 1;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Error from the dictionary layer.
    Core(dict_tree::Error),
    /// A seed line without the `:` delimiter.
    MalformedInput { path: PathBuf, line: usize },
    /// The seed file or a standard stream could not be read or written.
    Io(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Core(dict_tree::Error::EmptyCollection) => {
                write!(f, "{} Dictionary is empty.", "error:".red().bold())
            }
            CliError::Core(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::MalformedInput { path, line } => write!(
                f,
                "{} Invalid data format in file {} at line {line}\n  {} expected `<key>:<value>`",
                "error:".red().bold(),
                path.display(),
                "help:".cyan().bold(),
            ),
            CliError::Io(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<dict_tree::Error> for CliError {
    fn from(e: dict_tree::Error) -> Self {
        CliError::Core(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

/// Print error and exit with the appropriate code.
///
/// Callers must have dropped every resource they own; `process::exit` runs no destructors.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    process::exit(EXIT_ERROR)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
