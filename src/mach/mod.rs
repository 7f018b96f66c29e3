/*!
## Rust Machine Module

This Rust module is the dictionary and stack machine that runs Forth words.

*/

mod builtin;
mod dictionary;
mod operation;
mod runtime;
mod stack;

pub use builtin::BinOp;
pub use builtin::Builtin;
pub use dictionary::Dictionary;
pub use operation::Operation;
pub use runtime::Config;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use runtime::MAX_STACK_SIZE;
pub use stack::Stack;

#[cfg(test)]
mod tests;
