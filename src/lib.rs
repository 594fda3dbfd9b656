//! Bounded, blocking, thread-safe FIFO queue for producer/consumer pipelines.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use blocking_queue::BlockingQueue;
//!
//! let queue = Arc::new(BlockingQueue::with_capacity(2));
//!
//! let producer = {
//!     let queue = queue.clone();
//!     thread::spawn(move || {
//!         for i in 0..10 {
//!             queue.push(i).unwrap();
//!         }
//!         queue.close();
//!     })
//! };
//!
//! let received: Vec<usize> = queue.iter().collect();
//! producer.join().unwrap();
//! assert_eq!(received, (0..10).collect::<Vec<_>>());
//! ```

mod sync;
mod trace;

pub mod blocking_queue;
pub mod config;
pub mod error;

pub use crate::blocking_queue::{Batch, BlockingQueue, Iter};
pub use crate::config::Config;
pub use crate::error::{ConfigError, PopTimeoutError, PushError, PushTimeoutError, TryPopError, TryPushError};

#[cfg(test)]
mod tests;
