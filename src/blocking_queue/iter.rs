use std::iter::FusedIterator;
use crate::blocking_queue::BlockingQueue;

/// Blocking consuming iterator, see [BlockingQueue::iter].
///
/// Each `next` is a [pop](BlockingQueue::pop). Iteration ends at
/// end-of-stream: once the queue is closed and drained.
pub struct Iter<'a, T>{
    queue: &'a BlockingQueue<T>,
}

impl<'a, T> Iter<'a, T>{
    #[inline]
    pub(crate) fn new(queue: &'a BlockingQueue<T>) -> Self {
        Self{ queue }
    }
}

impl<'a, T> Iterator for Iter<'a, T>{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }
}

// A closed queue rejects every push, so drained stays drained.
impl<'a, T> FusedIterator for Iter<'a, T>{}
