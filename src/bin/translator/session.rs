use std::io::{BufRead, Write};

use dict_tree::{Dictionary, Error};
use tracing::debug;

use crate::error::CliResult;
use crate::input::lossy_lines;

/// Printed for a lookup whose key is not in the dictionary.
pub const NOT_FOUND: &str = "***Not Found!***";

/// Writes every entry as `<key>:<value>`, one per line, in ascending key order.
pub fn display<W: Write>(dict: &Dictionary, out: &mut W) -> CliResult<()> {
    let mut written = Ok(());
    dict.display_content(|entry| {
        if written.is_ok() {
            written = writeln!(out, "{entry}");
        }
    })?;
    written?;
    out.flush()?;
    Ok(())
}

/// Looks up each whitespace-separated token of `input` until end of input.
///
/// Found keys print `<token>:<value>` and missing keys print [`NOT_FOUND`]. A token with
/// bytes outside UTF-8 can never match a stored key, so it prints [`NOT_FOUND`] too. An empty
/// dictionary aborts the loop with [`Error::EmptyCollection`].
pub fn interactive<R: BufRead, W: Write>(dict: &Dictionary, input: R, out: &mut W) -> CliResult<()> {
    for line in lossy_lines(input) {
        let line = line?;
        for token in line.split_whitespace() {
            match dict.get(token) {
                Ok(entry) => {
                    debug!(key = token, "found");
                    writeln!(out, "{token}:{}", entry.value())?;
                }
                Err(Error::KeyNotFound { .. }) => {
                    debug!(key = token, "not found");
                    writeln!(out, "{NOT_FOUND}")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
        out.flush()?;
    }
    Ok(())
}
