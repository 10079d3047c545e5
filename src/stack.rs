use heapless::Vec;

pub type StackResult<T> = Result<T, StackError>;

/// Bounded LIFO container with a fixed capacity of `N` items.
pub struct Stack<T, const N: usize> {
    items: Vec<T, N>,
}

impl<T, const N: usize> Stack<T, N> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The most recently pushed item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn push(&mut self, item: T) -> StackResult<()> {
        self.items.push(item).map_err(|_| StackError::Full)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    Full,
}
