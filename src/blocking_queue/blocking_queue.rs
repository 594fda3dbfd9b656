//! Bounded blocking FIFO. Multi producers, multi consumers.
//!
//! One lock guards items, capacity and the closed flag. Producers park on
//! `not_full`, consumers park on `not_empty`, both with the lock released.
//!
//! Signals go out after the lock is released, and only when someone can
//! make progress:
//! - empty -> non-empty, and full -> non-full: one waiter;
//! - a waiter that made progress wakes the next one while work remains;
//! - [close](BlockingQueue::close), drained-after-close and
//!   [clear](BlockingQueue::clear): everyone.
//!
//! [BlockingQueue] is not reference counted. Share it with `Arc`; it lives
//! until the last producer or consumer drops its handle.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::sync::{Condvar, Mutex, MutexGuard};
use crate::blocking_queue::state::State;
use crate::blocking_queue::batch::Batch;
use crate::blocking_queue::iter::Iter;
use crate::config::Config;
use crate::error::{ConfigError, PopTimeoutError, PushError, PushTimeoutError, TryPopError, TryPushError};
use crate::trace::{debug, trace};

pub struct BlockingQueue<T>{
    state: Mutex<State<T>>,
    not_empty: Condvar,
    not_full : Condvar,
}

/// Why a wait loop gave up.
enum Stop{
    Closed,
    Timeout,
}

impl<T> BlockingQueue<T>{
    /// Unbounded queue: `push` never blocks.
    #[inline]
    pub fn new() -> Self {
        Self::from_config(&Config::unbounded())
    }

    /// # Panics
    ///
    /// If `capacity` is zero.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_config(&Config::bounded(capacity))
    }

    /// # Panics
    ///
    /// If `config.capacity` is zero. See [try_from_config](Self::try_from_config).
    pub fn from_config(config: &Config) -> Self {
        match Self::try_from_config(config) {
            Ok(queue) => queue,
            Err(err) => panic!("BlockingQueue: {}", err),
        }
    }

    /// Same as [from_config](Self::from_config), but reports an invalid
    /// `config` instead of panicking.
    pub fn try_from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(capacity = config.capacity, preallocate = config.initial_allocation(), "blocking queue created");

        Ok(Self{
            state: Mutex::new(State::new(config.capacity, config.initial_allocation())),
            not_empty: Condvar::new(),
            not_full : Condvar::new(),
        })
    }

    /// Appends `value` to the tail, blocking while the queue is full.
    ///
    /// Fails with the value handed back if the queue is closed, either
    /// already or while this call waits for room.
    pub fn push(&self, value: T) -> Result<(), PushError<T>> {
        let mut state = self.state.lock();
        match self.wait_for_room(&mut state, None) {
            Ok(()) => {
                self.push_locked(state, value);
                Ok(())
            }
            Err(_) => {
                drop(state);
                trace!("push rejected: queue closed");
                Err(PushError::Closed(value))
            }
        }
    }

    pub fn try_push(&self, value: T) -> Result<(), TryPushError<T>> {
        let state = self.state.lock();
        if state.closed {
            drop(state);
            trace!("push rejected: queue closed");
            return Err(TryPushError::Closed(value));
        }
        if state.is_full() {
            return Err(TryPushError::Full(value));
        }
        self.push_locked(state, value);
        Ok(())
    }

    #[inline]
    pub fn push_timeout(&self, value: T, timeout: Duration) -> Result<(), PushTimeoutError<T>> {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.push_until(value, Some(deadline)),
            None => self.push_until(value, None),
        }
    }

    #[inline]
    pub fn push_deadline(&self, value: T, deadline: Instant) -> Result<(), PushTimeoutError<T>> {
        self.push_until(value, Some(deadline))
    }

    fn push_until(&self, value: T, deadline: Option<Instant>) -> Result<(), PushTimeoutError<T>> {
        let mut state = self.state.lock();
        match self.wait_for_room(&mut state, deadline) {
            Ok(()) => {
                self.push_locked(state, value);
                Ok(())
            }
            Err(Stop::Timeout) => Err(PushTimeoutError::Timeout(value)),
            Err(Stop::Closed) => {
                drop(state);
                trace!("push rejected: queue closed");
                Err(PushTimeoutError::Closed(value))
            }
        }
    }

    /// Removes the head, blocking while the queue is empty and open.
    ///
    /// Returns `None` once the queue is closed and drained. From then on it
    /// never blocks again.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.state.lock();
        self.wait_for_item(&mut state, None).ok()?;
        self.pop_locked(state)
    }

    pub fn try_pop(&self) -> Result<T, TryPopError> {
        let state = self.state.lock();
        if state.items.is_empty() {
            return Err(if state.closed { TryPopError::Closed } else { TryPopError::Empty });
        }
        self.pop_locked(state).ok_or(TryPopError::Empty)
    }

    #[inline]
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T, PopTimeoutError> {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.pop_until(Some(deadline)),
            None => self.pop_until(None),
        }
    }

    #[inline]
    pub fn pop_deadline(&self, deadline: Instant) -> Result<T, PopTimeoutError> {
        self.pop_until(Some(deadline))
    }

    fn pop_until(&self, deadline: Option<Instant>) -> Result<T, PopTimeoutError> {
        let mut state = self.state.lock();
        match self.wait_for_item(&mut state, deadline) {
            Ok(()) => self.pop_locked(state).ok_or(PopTimeoutError::Closed),
            Err(Stop::Timeout) => Err(PopTimeoutError::Timeout),
            Err(Stop::Closed)  => Err(PopTimeoutError::Closed),
        }
    }

    /// Clone of the head, without removing it.
    pub fn peek(&self) -> Option<T>
        where T: Clone
    {
        self.state.lock().items.front().cloned()
    }

    /// Signals end-of-stream. Idempotent.
    ///
    /// Consumers drain what is left, then [pop](Self::pop) returns `None`.
    /// Producers, including those parked on a full queue, get their value
    /// back as [PushError::Closed].
    pub fn close(&self){
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.closed = true;
        debug!(remaining = state.items.len(), "blocking queue closed");
        drop(state);

        self.not_empty.notify_all();
        self.not_full.notify_all();
    }

    /// Drops all queued items and releases every parked producer.
    pub fn clear(&self){
        let mut state = self.state.lock();
        let items = std::mem::take(&mut state.items);
        drop(state);

        self.not_full.notify_all();

        trace!(dropped = items.len(), "blocking queue cleared");
        // Item destructors run outside the lock.
        drop(items);
    }

    /// Runs `f` with the lock held, for composite operations that must be
    /// atomic (peek + conditional pop, bulk push, ...).
    ///
    /// Waiters are signalled afterwards according to what `f` did, also
    /// when `f` panics: its changes up to the panic stay in the queue.
    /// `f` must not call back into this queue: the lock is not reentrant.
    pub fn batch<R, F>(&self, f: F) -> R
        where F: FnOnce(&mut Batch<'_, T>) -> R
    {
        let mut state = self.state.lock();
        let mut batch = Batch::new(&mut state);
        // Batch operations keep the state consistent at every step.
        let result = panic::catch_unwind(AssertUnwindSafe(|| f(&mut batch)));
        let wakeups = batch.wakeups();
        drop(state);

        wakeups.emit(&self.not_empty, &self.not_full);
        match result {
            Ok(result) => result,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    /// Blocking consuming iterator. Ends at end-of-stream.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.state.lock().is_full()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.state.lock().capacity
    }

    /// (parked producers, parked consumers)
    #[cfg(all(test, not(loom)))]
    pub(crate) fn parked(&self) -> (usize, usize) {
        let state = self.state.lock();
        (state.waiting_push, state.waiting_pop)
    }

    // -------------------------------------------------------------------------------------

    #[inline]
    fn push_locked(&self, mut state: MutexGuard<'_, State<T>>, value: T){
        let wakeups = state.push_back(value);
        drop(state);
        wakeups.emit(&self.not_empty, &self.not_full);
    }

    #[inline]
    fn pop_locked(&self, mut state: MutexGuard<'_, State<T>>) -> Option<T> {
        let (value, wakeups) = state.pop_front()?;
        drop(state);
        wakeups.emit(&self.not_empty, &self.not_full);
        Some(value)
    }

    /// On `Ok` there is room and the queue is open.
    fn wait_for_room(&self, state: &mut MutexGuard<'_, State<T>>, deadline: Option<Instant>) -> Result<(), Stop> {
        loop {
            if state.closed {
                return Err(Stop::Closed);
            }
            if !state.is_full() {
                return Ok(());
            }

            state.waiting_push += 1;
            let timed_out = wait(&self.not_full, state, deadline);
            state.waiting_push -= 1;

            if timed_out && state.is_full() && !state.closed {
                return Err(Stop::Timeout);
            }
        }
    }

    /// On `Ok` there is at least one item. `Closed` means closed and drained.
    fn wait_for_item(&self, state: &mut MutexGuard<'_, State<T>>, deadline: Option<Instant>) -> Result<(), Stop> {
        loop {
            if !state.items.is_empty() {
                return Ok(());
            }
            if state.closed {
                return Err(Stop::Closed);
            }

            state.waiting_pop += 1;
            let timed_out = wait(&self.not_empty, state, deadline);
            state.waiting_pop -= 1;

            if timed_out && state.items.is_empty() && !state.closed {
                return Err(Stop::Timeout);
            }
        }
    }
}

/// Returns true if `deadline` passed.
#[inline]
fn wait<T>(condvar: &Condvar, state: &mut MutexGuard<'_, State<T>>, deadline: Option<Instant>) -> bool {
    match deadline {
        Some(deadline) => condvar.wait_until(state, deadline).timed_out(),
        None => {
            condvar.wait(state);
            false
        }
    }
}

impl<T> Default for BlockingQueue<T>{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a BlockingQueue<T>{
    type Item = T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> std::fmt::Debug for BlockingQueue<T>{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("BlockingQueue")
            .field("len", &state.items.len())
            .field("capacity", &state.capacity)
            .field("closed", &state.closed)
            .finish_non_exhaustive()
    }
}
