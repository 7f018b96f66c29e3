use super::{BinOp, Builtin};
use crate::lang::MAX_WORD_SIZE;
use std::collections::HashMap;

const BUILTINS: &[(&str, Builtin)] = &[
    ("+", Builtin::Binary(BinOp::Add)),
    ("-", Builtin::Binary(BinOp::Subtract)),
    ("*", Builtin::Binary(BinOp::Multiply)),
    ("/", Builtin::Binary(BinOp::Divide)),
    (".", Builtin::Print),
    ("and", Builtin::Binary(BinOp::And)),
    ("or", Builtin::Binary(BinOp::Or)),
    (">>", Builtin::Binary(BinOp::ShiftRight)),
    ("<<", Builtin::Binary(BinOp::ShiftLeft)),
    ("mod", Builtin::Binary(BinOp::Mod)),
    ("print", Builtin::Print),
    ("dup", Builtin::Dup),
    ("drop", Builtin::Drop),
    ("swap", Builtin::Swap),
    (".s", Builtin::ShowStack),
];

/// ## Immutable word table
///
/// Lookup is a case-sensitive exact match.
#[derive(Debug)]
pub struct Dictionary {
    words: HashMap<&'static str, Builtin>,
}

impl Default for Dictionary {
    fn default() -> Dictionary {
        Dictionary {
            words: BUILTINS.iter().copied().collect(),
        }
    }
}

impl Dictionary {
    pub fn lookup(&self, word: &str) -> Option<Builtin> {
        if word.len() > MAX_WORD_SIZE {
            return None;
        }
        self.words.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.keys().copied()
    }
}
