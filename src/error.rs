//! Errors of the fallible [BlockingQueue](crate::BlockingQueue) operations.
//!
//! Every push error hands the rejected value back, see `into_inner`.
//! `Debug` never prints the value, so any payload type works.

use std::fmt;
use thiserror::Error;

/// Returned by [push](crate::BlockingQueue::push).
#[derive(Error, PartialEq, Eq)]
pub enum PushError<T>{
    /// Queue was closed before room became available.
    #[error("pushing into a closed queue")]
    Closed(T),
}

impl<T> PushError<T>{
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            PushError::Closed(value) => value,
        }
    }
}

impl<T> fmt::Debug for PushError<T>{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Closed(_) => f.write_str("Closed(..)"),
        }
    }
}

/// Returned by [try_push](crate::BlockingQueue::try_push) and
/// [Batch::push_back](crate::Batch::push_back).
#[derive(Error, PartialEq, Eq)]
pub enum TryPushError<T>{
    #[error("queue is full")]
    Full(T),
    #[error("pushing into a closed queue")]
    Closed(T),
}

impl<T> TryPushError<T>{
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            TryPushError::Full(value) | TryPushError::Closed(value) => value,
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, TryPushError::Full(_))
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, TryPushError::Closed(_))
    }
}

impl<T> fmt::Debug for TryPushError<T>{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPushError::Full(_)   => f.write_str("Full(..)"),
            TryPushError::Closed(_) => f.write_str("Closed(..)"),
        }
    }
}

/// Returned by [push_timeout](crate::BlockingQueue::push_timeout) and
/// [push_deadline](crate::BlockingQueue::push_deadline).
#[derive(Error, PartialEq, Eq)]
pub enum PushTimeoutError<T>{
    /// Deadline passed while the queue stayed full.
    #[error("timed out waiting for room in the queue")]
    Timeout(T),
    #[error("pushing into a closed queue")]
    Closed(T),
}

impl<T> PushTimeoutError<T>{
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            PushTimeoutError::Timeout(value) | PushTimeoutError::Closed(value) => value,
        }
    }

    #[inline]
    pub fn is_timeout(&self) -> bool {
        matches!(self, PushTimeoutError::Timeout(_))
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, PushTimeoutError::Closed(_))
    }
}

impl<T> fmt::Debug for PushTimeoutError<T>{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushTimeoutError::Timeout(_) => f.write_str("Timeout(..)"),
            PushTimeoutError::Closed(_)  => f.write_str("Closed(..)"),
        }
    }
}

/// Returned by [try_pop](crate::BlockingQueue::try_pop).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryPopError{
    /// Nothing queued yet, but more may arrive.
    #[error("queue is empty")]
    Empty,
    /// Nothing queued, and nothing ever will be.
    #[error("queue is closed and drained")]
    Closed,
}

/// Returned by [pop_timeout](crate::BlockingQueue::pop_timeout) and
/// [pop_deadline](crate::BlockingQueue::pop_deadline).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopTimeoutError{
    #[error("timed out waiting for an item")]
    Timeout,
    #[error("queue is closed and drained")]
    Closed,
}

/// Returned by [Config::validate](crate::Config::validate) and
/// [try_from_config](crate::BlockingQueue::try_from_config).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError{
    /// A queue that can never hold an item would block every push.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
}
