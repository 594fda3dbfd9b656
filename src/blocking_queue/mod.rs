//! Bounded blocking queue.
//!
//! Producers block while full, consumers block while empty.
//! [close](BlockingQueue::close) signals end-of-stream: consumers drain the
//! remaining items, then stop waiting.

mod state;
mod batch;
mod iter;

#[allow(clippy::module_inception)]
mod blocking_queue;

pub use blocking_queue::*;
pub use batch::*;
pub use iter::*;
