use std::collections::VecDeque;
use crate::sync::Condvar;

/// Everything guarded by the queue lock.
pub(crate) struct State<T>{
    pub(crate) items: VecDeque<T>,
    pub(crate) capacity: usize,
    pub(crate) closed: bool,

    /// Threads parked on `not_full` / `not_empty`. Includes notified threads
    /// that have not reacquired the lock yet.
    pub(crate) waiting_push: usize,
    pub(crate) waiting_pop : usize,
}

impl<T> State<T>{
    pub(crate) fn new(capacity: usize, preallocate: usize) -> Self {
        Self{
            items: VecDeque::with_capacity(preallocate),
            capacity,
            closed: false,
            waiting_push: 0,
            waiting_pop : 0,
        }
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Caller ensures there is room and the queue is open.
    #[inline]
    pub(crate) fn push_back(&mut self, value: T) -> Wakeups {
        debug_assert!(!self.is_full() && !self.closed);

        let was_empty = self.items.is_empty();
        self.items.push_back(value);

        let mut wakeups = Wakeups::default();
        if was_empty {
            wakeups.not_empty = Notify::One;
        }
        // Pass the wakeup along: a producer notified earlier may have left
        // another one parked while room is still available.
        if !self.is_full() && self.waiting_push > 0 {
            wakeups.not_full = Notify::One;
        }
        wakeups
    }

    #[inline]
    pub(crate) fn pop_front(&mut self) -> Option<(T, Wakeups)> {
        let was_full = self.is_full();
        let value = self.items.pop_front()?;

        let mut wakeups = Wakeups::default();
        if was_full {
            wakeups.not_full = Notify::One;
        }
        wakeups.not_empty = self.not_empty_wakeup();
        Some((value, wakeups))
    }

    /// What consumers need after items were taken out (or added in a batch).
    #[inline]
    pub(crate) fn not_empty_wakeup(&self) -> Notify {
        if self.items.is_empty() {
            // Terminal state: release every consumer.
            if self.closed { Notify::All } else { Notify::None }
        } else if self.waiting_pop > 0 {
            Notify::One
        } else {
            Notify::None
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Notify{
    #[default]
    None,
    One,
    All,
}

impl Notify{
    #[inline]
    fn emit(self, condvar: &Condvar){
        match self {
            Notify::None => {}
            Notify::One  => { condvar.notify_one(); }
            Notify::All  => { condvar.notify_all(); }
        }
    }
}

/// Signals collected under the lock, emitted after it is released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) struct Wakeups{
    pub(crate) not_empty: Notify,
    pub(crate) not_full : Notify,
}

impl Wakeups{
    #[inline]
    pub(crate) fn emit(self, not_empty: &Condvar, not_full: &Condvar){
        self.not_full.emit(not_full);
        self.not_empty.emit(not_empty);
    }
}
