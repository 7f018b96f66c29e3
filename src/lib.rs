//! # Forth
//!
//! A minimal Forth: whitespace separated words, one line at a time,
//! evaluated against a bounded stack of 32-bit integers.
//!
//! ```text
//! > 3 4 + .
//! 7
//! > 5 dup * .
//! 25
//! > 1 2 3 .s    \ everything after a lone backslash is ignored
//! <3> 1 2 3
//! ```
//!
//! Any word that is not in the table below is read as a base-10 integer
//! and pushed. Binary words take `op2` (second from top) and `op1` (top)
//! and leave `op2 <op> op1`, so `10 3 -` leaves `7`.
//!
//! | Word | Effect |
//! |------|--------|
//! | `+` `-` `*` `/` `mod` | Arithmetic. Division truncates toward zero. |
//! | `and` `or` `<<` `>>` | Bitwise. `>>` keeps the sign. |
//! | `.` `print` | Pop and print the top value. |
//! | `dup` | Push a copy of the top value. |
//! | `drop` | Pop and discard the top value. |
//! | `swap` | Exchange the top two values. |
//! | `.s` | Print the depth and the stack, bottom first. |
//!
//! Mistakes are reported with their line and column and evaluation carries
//! on with the next word. A word that fails leaves the stack as it was.
//! Only input that cannot be read at all, or a line longer than
//! 256 characters, ends the run.

pub mod lang;
pub mod mach;
pub mod term;
