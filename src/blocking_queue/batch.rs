use std::collections::vec_deque;

use crate::blocking_queue::state::{Notify, State, Wakeups};
use crate::error::TryPushError;

/// Locked view of a [BlockingQueue](crate::BlockingQueue), see
/// [batch](crate::BlockingQueue::batch).
///
/// Modifications keep the queue invariants: `push_back` honours capacity
/// and the closed flag, order is FIFO.
pub struct Batch<'a, T>{
    state: &'a mut State<T>,
    pushed: usize,
    popped: usize,
}

impl<'a, T> Batch<'a, T>{
    #[inline]
    pub(crate) fn new(state: &'a mut State<T>) -> Self {
        Self{ state, pushed: 0, popped: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.state.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.state.is_full()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.state.capacity
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state.closed
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.state.items.front()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.state.items.front_mut()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.state.items.back()
    }

    /// Head to tail.
    #[inline]
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.state.items.iter()
    }

    pub fn push_back(&mut self, value: T) -> Result<(), TryPushError<T>> {
        if self.state.closed {
            return Err(TryPushError::Closed(value));
        }
        if self.state.is_full() {
            return Err(TryPushError::Full(value));
        }
        self.state.items.push_back(value);
        self.pushed += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.state.items.pop_front()?;
        self.popped += 1;
        Some(value)
    }

    /// Keeps only the items for which `f` returns true. Order is preserved.
    pub fn retain<F>(&mut self, f: F)
        where F: FnMut(&T) -> bool
    {
        let len = self.state.items.len();
        self.state.items.retain(f);
        self.popped += len - self.state.items.len();
    }

    pub(crate) fn wakeups(&self) -> Wakeups {
        let mut wakeups = Wakeups::default();
        if self.popped > 0 && self.state.waiting_push > 0 {
            // Woken producer passes the wakeup along while room remains.
            wakeups.not_full = Notify::One;
        }
        if self.pushed > 0 || self.popped > 0 {
            wakeups.not_empty = self.state.not_empty_wakeup();
        }
        wakeups
    }
}

impl<'a, 'b, T> IntoIterator for &'b Batch<'a, T>{
    type Item = &'b T;
    type IntoIter = vec_deque::Iter<'b, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
