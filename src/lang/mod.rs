/*!
# Rust Language Module

This Rust module provides line reading, word splitting and literal parsing
for the Forth language.

*/

/// 1-based number of the input line an error belongs to.
pub type LineNumber = Option<usize>;
/// Character range of a word within its line.
pub type Column = std::ops::Range<usize>;

/// Longest word the tokenizer accepts.
pub const MAX_WORD_SIZE: usize = 32;
/// Longest line the line reader accepts, newline excluded.
pub const MAX_LINE_SIZE: usize = 256;

/// Everything after this word is ignored until the end of the line.
pub const COMMENT: &str = "\\";

#[macro_use]
mod error;
mod lex;
mod line;
mod literal;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;
pub use lex::Word;
pub use line::check_len;
pub use line::LineReader;
pub use line::LineSource;
pub use literal::parse_literal;
