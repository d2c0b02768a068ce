//! Line-oriented word list parser.

use std::io::{BufRead, BufReader, Read};

use crate::{Result, Tree};

/// Reads one word per line from a byte source.
///
/// Lines are split on `\n` and a trailing `\r` is dropped. Empty lines are
/// skipped. Words are raw bytes and need not be UTF-8.
pub struct WordListReader<R: Read> {
    inner: BufReader<R>,
}

impl<R: Read> WordListReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            inner: BufReader::new(source),
        }
    }

    /// Insert every word into `tree`. Returns the number of words read.
    pub fn load_into(&mut self, tree: &mut Tree) -> Result<usize> {
        let mut count = 0;
        let mut line = Vec::new();

        loop {
            line.clear();
            if self.inner.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            let word = trim_line_ending(&line);
            if word.is_empty() {
                continue;
            }

            tree.insert(word);
            count += 1;
        }

        log::debug!("Read {} words", count);
        Ok(count)
    }

    /// Build a new tree from the whole word list.
    pub fn read_tree(mut self) -> Result<Tree> {
        let mut tree = Tree::new();
        self.load_into(&mut tree)?;
        Ok(tree)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
