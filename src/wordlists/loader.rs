//! Word list line reading
//!
//! Every text format the engine reads shares the same line rules: whitespace
//! runs collapse to a single space, blank lines and lines starting with `#`
//! are skipped, and the first space-separated token is the key (a word, a
//! stem or an alphagram) with the remainder as its payload.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One meaningful line of a word list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based line number in the source file
    pub line: usize,
    /// The line with whitespace simplified
    pub text: String,
}

impl Entry {
    /// The first token of the line
    #[must_use]
    pub fn key(&self) -> &str {
        self.text.split(' ').next().unwrap_or_default()
    }

    /// Everything after the first token, empty if nothing follows
    #[must_use]
    pub fn rest(&self) -> &str {
        self.text.split_once(' ').map_or("", |(_, rest)| rest)
    }
}

/// Iterator over the entries of a word list
pub struct Entries<R> {
    reader: R,
    path: PathBuf,
    line: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> Entries<R> {
    /// Wrap a reader; `path` is only used in error messages
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            line: 0,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(Error::read(&self.path, e))),
            }
            self.line += 1;

            let raw = String::from_utf8_lossy(&self.buffer);
            let text = simplify(&raw);
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return Some(Ok(Entry {
                line: self.line,
                text,
            }));
        }
    }
}

/// Open a word list file for entry-by-entry reading
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be opened.
pub fn read_entries(path: &Path) -> Result<Entries<BufReader<File>>> {
    let file = File::open(path).map_err(|e| Error::open(path, e))?;
    Ok(Entries::new(BufReader::new(file), path))
}

/// Collapse whitespace runs to single spaces and trim the ends
#[must_use]
pub fn simplify(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a space-separated word list into upper-case words
///
/// # Examples
/// ```
/// use word_engine::wordlists::loader::words_from_list;
///
/// assert_eq!(words_from_list("cat  DOG\tfish"), vec!["CAT", "DOG", "FISH"]);
/// ```
#[must_use]
pub fn words_from_list(list: &str) -> Vec<String> {
    list.split_whitespace()
        .map(str::to_ascii_uppercase)
        .collect()
}
