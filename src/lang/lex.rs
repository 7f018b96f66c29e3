use super::{Column, Error, MAX_WORD_SIZE};

type Result<T> = std::result::Result<T, Error>;

/// Split one line into words.
pub fn lex(s: &str) -> Lexer<'_> {
    Lexer::new(s)
}

/// Matches C `isspace` in the "C" locale, so vertical tab is included.
fn is_forth_whitespace(c: char) -> bool {
    c == ' ' || ('\t'..='\r').contains(&c)
}

/// A word as it appears in the line.
#[derive(Debug, PartialEq, Clone)]
pub struct Word<'a> {
    pub text: &'a str,
    /// Characters of the word, counted from the start of the line.
    pub column: Column,
    /// Characters consumed since the previous word ended, leading
    /// whitespace included.
    pub consumed: usize,
}

/// Lazy word iterator over a single line.
///
/// Columns count characters, not bytes, so diagnostics stay correct for the
/// odd non-ASCII byte that makes it through the line reader.
pub struct Lexer<'a> {
    line: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Lexer<'a> {
        Lexer {
            line,
            chars: line.char_indices().peekable(),
            col: 0,
        }
    }

    fn whitespace(&mut self) -> usize {
        let mut len = 0;
        while let Some((_, ch)) = self.chars.peek() {
            if !is_forth_whitespace(*ch) {
                break;
            }
            self.chars.next();
            len += 1;
        }
        self.col += len;
        len
    }

    fn word(&mut self, skipped: usize) -> Option<Result<Word<'a>>> {
        let (start, _) = *self.chars.peek()?;
        let mut end = self.line.len();
        let mut len = 0;
        while let Some((idx, ch)) = self.chars.peek() {
            if is_forth_whitespace(*ch) {
                end = *idx;
                break;
            }
            self.chars.next();
            len += 1;
        }
        let column = self.col..self.col + len;
        self.col += len;
        let text = &self.line[start..end];
        if len > MAX_WORD_SIZE {
            return Some(Err(error!(WordTooLong, ..&column; text)));
        }
        Some(Ok(Word {
            text,
            column,
            consumed: skipped + len,
        }))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Word<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let skipped = self.whitespace();
        self.word(skipped)
    }
}
