use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Storage is allocated once at construction and never grows.

pub struct Stack<T> {
    capacity: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T: Copy> Stack<T> {
    pub fn new(capacity: usize) -> Stack<T> {
        Stack {
            capacity,
            vec: Vec::with_capacity(capacity),
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn depth(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    /// Fails unless at least `n` values are present. Nothing is consumed.
    pub fn require(&self, n: usize) -> Result<()> {
        if self.vec.len() < n {
            Err(self.underflow_error())
        } else {
            Ok(())
        }
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(error!(StackOverflow));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn peek(&self) -> Result<T> {
        match self.vec.last() {
            Some(v) => Ok(*v),
            None => Err(self.underflow_error()),
        }
    }
    /// Second from top.
    pub fn peek_under(&self) -> Result<T> {
        match self.vec.len().checked_sub(2) {
            Some(idx) => Ok(self.vec[idx]),
            None => Err(self.underflow_error()),
        }
    }
    pub fn replace_top(&mut self, val: T) -> Result<()> {
        match self.vec.last_mut() {
            Some(v) => {
                *v = val;
                Ok(())
            }
            None => Err(self.underflow_error()),
        }
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        self.require(2)?;
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
}
