//! Seed-file loading.
//!
//! A seed file holds one `<key>:<value>` entry per line. The first `:` splits key from value,
//! so values may contain further colons. Keys already loaded are skipped, so the first line
//! for a key wins.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use dict_tree::{Dictionary, Entry, Error};
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::input::lossy_lines;

/// What a load pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that added a new entry.
    pub loaded: usize,
    /// Lines whose key was already present.
    pub skipped: usize,
}

/// Splits a seed line at its first `:`. Returns `None` when there is no delimiter.
pub fn parse_line(line: &str) -> Option<Entry> {
    let (key, value) = line.split_once(':')?;
    Some(Entry::new(key, value))
}

/// Opens `path` and loads every line into `dict`.
pub fn load_file(path: &Path, dict: &mut Dictionary) -> CliResult<LoadReport> {
    let file = File::open(path)
        .map_err(|e| CliError::Io(format!("Unable to open file: {}: {e}", path.display())))?;
    load(BufReader::new(file), path, dict)
}

/// Loads every line of `reader` into `dict`, stopping at the first malformed line.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD. `path` is only used to label
/// errors.
pub fn load<R: BufRead>(reader: R, path: &Path, dict: &mut Dictionary) -> CliResult<LoadReport> {
    let mut report = LoadReport::default();

    for (index, line) in lossy_lines(reader).enumerate() {
        let line = line?;
        let entry = parse_line(&line).ok_or_else(|| CliError::MalformedInput {
            path: path.to_path_buf(),
            line: index + 1,
        })?;

        match dict.get(entry.key()) {
            Ok(_) => {
                debug!(key = entry.key(), line = index + 1, "skipping duplicate seed entry");
                report.skipped += 1;
            }
            Err(Error::KeyNotFound { .. } | Error::EmptyCollection) => match dict.put(entry) {
                Ok(()) => report.loaded += 1,
                Err(Error::DuplicateKey { .. }) => report.skipped += 1,
                Err(e) => return Err(e.into()),
            },
            Err(e) => return Err(e.into()),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn load_str(text: &str) -> (CliResult<LoadReport>, Dictionary) {
        let mut dict = Dictionary::new();
        let result = load(Cursor::new(text), Path::new("seed.txt"), &mut dict);
        (result, dict)
    }

    #[test]
    fn first_colon_splits_key_and_value() {
        let entry = parse_line("time:12:30").unwrap();
        assert_eq!(entry.key(), "time");
        assert_eq!(entry.value(), "12:30");

        let entry = parse_line(":empty key").unwrap();
        assert_eq!(entry.key(), "");
        assert!(parse_line("no delimiter").is_none());
    }

    #[test]
    fn duplicate_keys_keep_first_value() {
        let (result, dict) = load_str("cat:chat\ndog:chien\ncat:chatte\n");
        assert_eq!(result.unwrap(), LoadReport { loaded: 2, skipped: 1 });
        assert_eq!(dict.element_count(), 2);
        assert_eq!(dict.get("cat").unwrap().value(), "chat");
        assert_eq!(dict.get("dog").unwrap().value(), "chien");
    }

    #[test]
    fn malformed_line_stops_loading() {
        let (result, dict) = load_str("cat:chat\nbroken\ndog:chien\n");
        match result {
            Err(CliError::MalformedInput { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed input, got {other:?}"),
        }
        assert_eq!(dict.element_count(), 1);
        assert!(dict.get("dog").is_err());
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let (result, dict) = load_str("cat:chat\r\ndog:chien\r\n");
        assert_eq!(result.unwrap().loaded, 2);
        assert_eq!(dict.get("dog").unwrap().value(), "chien");
    }

    #[test]
    fn invalid_utf8_does_not_stop_loading() {
        let mut dict = Dictionary::new();
        let input: &[u8] = b"dog:chien\ncoffee:caf\xe9\ncat:chat\n";
        let report = load(Cursor::new(input), Path::new("seed.txt"), &mut dict).unwrap();

        assert_eq!(report.loaded, 3);
        assert_eq!(dict.get("coffee").unwrap().value(), "caf\u{fffd}");
        assert_eq!(dict.get("cat").unwrap().value(), "chat");
    }

    #[test]
    fn empty_input_loads_nothing() {
        let (result, dict) = load_str("");
        assert_eq!(result.unwrap(), LoadReport::default());
        assert_eq!(dict.element_count(), 0);
    }
}
