use heapless::Deque;

pub type QueueResult<T> = Result<T, QueueError>;

/// Bounded FIFO container with a fixed capacity of `N` items.
pub struct Queue<T, const N: usize> {
    items: Deque<T, N>,
}

impl<T, const N: usize> Queue<T, N> {
    pub fn new() -> Self {
        Self { items: Deque::new() }
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The oldest item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn push(&mut self, item: T) -> QueueResult<()> {
        self.items.push_back(item).map_err(|_| QueueError::Full)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    Full,
}
