use super::{Operation, Stack};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Operand tag of the shared binary operator.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,
    And,
    Or,
    ShiftLeft,
    ShiftRight,
}

impl BinOp {
    /// `op2` is second from top, `op1` is the top.
    pub fn apply(self, op2: i32, op1: i32) -> Result<i32> {
        use BinOp::*;
        match self {
            Add => Operation::sum(op2, op1),
            Subtract => Operation::subtract(op2, op1),
            Multiply => Operation::multiply(op2, op1),
            Divide => Operation::divide(op2, op1),
            Mod => Operation::remainder(op2, op1),
            And => Ok(op2 & op1),
            Or => Ok(op2 | op1),
            ShiftLeft => Operation::shift_left(op2, op1),
            ShiftRight => Operation::shift_right(op2, op1),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Builtin {
    Binary(BinOp),
    Print,
    Dup,
    Drop,
    Swap,
    ShowStack,
}

impl Builtin {
    /// Operands that must be on the stack before the word may run.
    pub fn arity(self) -> usize {
        use Builtin::*;
        match self {
            Binary(_) | Swap => 2,
            Print | Dup | Drop => 1,
            ShowStack => 0,
        }
    }

    /// Run against the stack. Returns text to print, if the word prints.
    ///
    /// On error the stack is exactly as it was before the call.
    pub fn execute(self, stack: &mut Stack<i32>) -> Result<Option<String>> {
        use Builtin::*;
        stack.require(self.arity())?;
        match self {
            Binary(op) => {
                let op1 = stack.peek()?;
                let op2 = stack.peek_under()?;
                let result = op.apply(op2, op1)?;
                stack.pop()?;
                stack.replace_top(result)?;
                Ok(None)
            }
            Print => Ok(Some(stack.pop()?.to_string())),
            Dup => {
                stack.push(stack.peek()?)?;
                Ok(None)
            }
            Drop => {
                stack.pop()?;
                Ok(None)
            }
            Swap => {
                let (one, two) = stack.pop_2()?;
                stack.push(two)?;
                stack.push(one)?;
                Ok(None)
            }
            ShowStack => {
                let mut s = format!("<{}>", stack.depth());
                for val in stack.iter() {
                    s.push_str(&format!(" {}", val));
                }
                Ok(Some(s))
            }
        }
    }
}

