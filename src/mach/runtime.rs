use super::{Dictionary, Stack};
use crate::lang::{lex, parse_literal, Error, LineSource, Word, COMMENT};
use tracing::{debug, info, trace};

type Result<T> = std::result::Result<T, Error>;

/// Default data stack capacity in cells.
pub const MAX_STACK_SIZE: usize = 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub stack_size: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            stack_size: MAX_STACK_SIZE,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum State {
    Running,
    LineDone,
    CommentSkip,
    Eof,
}

/// Terminal output produced while evaluating a line, in order.
#[derive(Debug, PartialEq)]
pub enum Event {
    Print(String),
    Error(Error),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Print(s) => write!(f, "{}", s),
            Event::Error(e) => write!(f, "{}", e),
        }
    }
}

/// ## Forth evaluator
///
/// Owns the data stack and the dictionary. Lines go in through
/// [`Runtime::enter`] or [`Runtime::eval`]; nothing else touches the stack.
pub struct Runtime {
    dictionary: Dictionary,
    stack: Stack<i32>,
    state: State,
    line_number: usize,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime {
            dictionary: Dictionary::default(),
            stack: Stack::new(config.stack_size),
            state: State::Running,
            line_number: 0,
        }
    }

    pub fn stack(&self) -> &Stack<i32> {
        &self.stack
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.state = State::Running;
        self.line_number = 0;
    }

    /// Run every line of `source`, handing output to `emit` as it happens.
    ///
    /// Only errors from the source or from `emit` stop the loop.
    pub fn eval<S, F>(&mut self, source: &mut S, mut emit: F) -> Result<()>
    where
        S: LineSource,
        F: FnMut(Event) -> std::io::Result<()>,
    {
        self.reset();
        loop {
            let line = match source.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(error) => {
                    self.state = State::Eof;
                    return Err(error);
                }
            };
            for event in self.enter(&line) {
                if let Err(error) = emit(event) {
                    self.state = State::Eof;
                    return Err(error.into());
                }
            }
        }
        self.state = State::Eof;
        info!(
            lines = self.line_number,
            depth = self.stack.depth(),
            "finished processing"
        );
        Ok(())
    }

    /// Evaluate one line.
    pub fn enter(&mut self, line: &str) -> Vec<Event> {
        self.line_number += 1;
        self.state = State::Running;
        let mut events = vec![];
        for word in lex(line) {
            let word = match word {
                Ok(word) => word,
                Err(error) => {
                    events.push(Event::Error(error.in_line_number(Some(self.line_number))));
                    continue;
                }
            };
            trace!(word = word.text, column = word.column.start, "word");
            if word.text == COMMENT {
                self.state = State::CommentSkip;
                break;
            }
            if let Err(error) = self.word(&word, &mut events) {
                events.push(Event::Error(error));
            }
        }
        self.state = State::LineDone;
        events
    }

    fn word(&mut self, word: &Word, events: &mut Vec<Event>) -> Result<()> {
        let line = Some(self.line_number);
        if let Some(builtin) = self.dictionary.lookup(word.text) {
            let printed = builtin
                .execute(&mut self.stack)
                .map_err(|e| e.in_line_number(line).in_column(&word.column).message(word.text))?;
            debug!(?builtin, depth = self.stack.depth(), "dispatch");
            if let Some(s) = printed {
                events.push(Event::Print(s));
            }
            return Ok(());
        }
        let val = parse_literal(word.text)
            .map_err(|e| e.in_line_number(line).in_column(&word.column))?;
        self.stack
            .push(val)
            .map_err(|e| e.in_line_number(line).in_column(&word.column).message(word.text))?;
        debug!(val, depth = self.stack.depth(), "literal");
        Ok(())
    }
}
