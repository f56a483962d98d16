//! Line reading that tolerates bytes outside UTF-8.
//!
//! Seed files and stdin may carry legacy encodings such as Latin-1. Each line is decoded with
//! `String::from_utf8_lossy`, so an invalid byte turns into U+FFFD instead of ending the read.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader, created by [`lossy_lines`].
///
/// Like [`BufRead::lines`], a trailing `\n` or `\r\n` is stripped from every line.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
