use crate::error::RideError;
use std::collections::vec_deque::{self, VecDeque};

/// Waiting line in front of a ride, strictly first in first out.
///
/// Duplicates are allowed, the same ticket queued twice means the visitor
/// wants to ride again.
#[derive(Debug, Clone)]
pub struct Queue<V> {
    visitors: VecDeque<V>,
}

impl<V> Queue<V> {
    pub fn new() -> Queue<V> {
        Queue {
            visitors: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, visitor: V) {
        self.visitors.push_back(visitor);
    }

    pub fn dequeue(&mut self) -> Result<V, RideError> {
        self.visitors.pop_front().ok_or(RideError::EmptyQueue)
    }

    /// Current contents from head to tail, without removing anything.
    pub fn peek_all(&self) -> vec_deque::Iter<'_, V> {
        self.visitors.iter()
    }

    pub fn size(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

impl<V> Default for Queue<V> {
    fn default() -> Queue<V> {
        Queue::new()
    }
}
