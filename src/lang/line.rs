use super::{Error, MAX_LINE_SIZE};
use std::io::{BufRead, Read};

type Result<T> = std::result::Result<T, Error>;

/// ## Where the evaluator gets its lines
///
/// `Ok(None)` means the input is exhausted. Errors are fatal to the run.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Bounded line reader over any buffered byte stream.
pub struct LineReader<R> {
    inner: R,
    max_len: usize,
    line_number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> LineReader<R> {
        LineReader::with_max_len(inner, MAX_LINE_SIZE)
    }

    pub fn with_max_len(inner: R, max_len: usize) -> LineReader<R> {
        LineReader {
            inner,
            max_len,
            line_number: 0,
            buf: Vec::with_capacity(4 * (max_len + 1) + 1),
        }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        // Room for the bound in 4-byte characters plus one more, `\r` included.
        let limit = (4 * (self.max_len + 1) + 1) as u64;
        let read = self
            .inner
            .by_ref()
            .take(limit)
            .read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        } else if read as u64 == limit {
            return Err(error!(LineTooLong, Some(self.line_number)));
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        let line = match std::str::from_utf8(&self.buf) {
            Ok(s) => s,
            Err(e) => return Err(error!(InvalidInput, Some(self.line_number); e.to_string())),
        };
        check_len(line, self.max_len, self.line_number)?;
        Ok(Some(line.to_string()))
    }
}

/// Lines are bounded in characters, line terminator excluded.
pub fn check_len(line: &str, max_len: usize, line_number: usize) -> Result<()> {
    if line.chars().count() > max_len {
        Err(error!(LineTooLong, Some(line_number)))
    } else {
        Ok(())
    }
}

/// Lines that already sit in memory.
impl LineSource for std::vec::IntoIter<String> {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.next())
    }
}
