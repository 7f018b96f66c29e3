//! # Forth
//!
//! Runs a Forth source file, or standard input when no file is given.
//!

fn main() {
    forth::term::main();
}
