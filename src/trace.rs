//! Optional diagnostics.
//!
//! Enable with `--features tracing`. Without the feature every macro expands
//! to nothing, so queue operations carry no logging cost.
//!
//! Nothing is logged on the push/pop hot path. Events cover the lifecycle:
//! construction, close, clear and pushes rejected after close.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug_noop as debug;
#[cfg(not(feature = "tracing"))]
pub(crate) use trace_noop as trace;
