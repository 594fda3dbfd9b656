#[cfg(loom)]
pub(crate) use loom::thread;
#[cfg(loom)]
pub(crate) use loom::sync::Arc;

#[cfg(loom)]
use std::ops::{Deref, DerefMut};
#[cfg(loom)]
use std::time::Instant;

/// loom's Mutex, with parking_lot's call shape.
#[cfg(loom)]
pub(crate) struct Mutex<T>(loom::sync::Mutex<T>);
#[cfg(loom)]
impl<T> Mutex<T>{
    pub(crate) fn new(data: T) -> Self {
        Self(loom::sync::Mutex::new(data))
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, T> {
        MutexGuard(Some(self.0.lock().unwrap()))
    }
}

/// Always `Some`, except while parked inside [Condvar::wait].
#[cfg(loom)]
pub(crate) struct MutexGuard<'a, T>(Option<loom::sync::MutexGuard<'a, T>>);
#[cfg(loom)]
impl<'a, T> Deref for MutexGuard<'a, T>{
    type Target = T;
    fn deref(&self) -> &T {
        self.0.as_deref().unwrap()
    }
}
#[cfg(loom)]
impl<'a, T> DerefMut for MutexGuard<'a, T>{
    fn deref_mut(&mut self) -> &mut T {
        self.0.as_deref_mut().unwrap()
    }
}

#[cfg(loom)]
pub(crate) struct WaitTimeoutResult(bool);
#[cfg(loom)]
impl WaitTimeoutResult{
    pub(crate) fn timed_out(&self) -> bool {
        self.0
    }
}

#[cfg(loom)]
pub(crate) struct Condvar(loom::sync::Condvar);
#[cfg(loom)]
impl Condvar{
    pub(crate) fn new() -> Self {
        Self(loom::sync::Condvar::new())
    }

    pub(crate) fn wait<T>(&self, guard: &mut MutexGuard<'_, T>) {
        let inner = guard.0.take().unwrap();
        guard.0 = Some(self.0.wait(inner).unwrap());
    }

    // loom does not model time: the wait behaves like a (possibly spurious) wakeup.
    pub(crate) fn wait_until<T>(&self, guard: &mut MutexGuard<'_, T>, deadline: Instant) -> WaitTimeoutResult {
        let inner = guard.0.take().unwrap();
        let timeout = deadline.saturating_duration_since(Instant::now());
        let (inner, result) = self.0.wait_timeout(inner, timeout).unwrap();
        guard.0 = Some(inner);
        WaitTimeoutResult(result.timed_out())
    }

    pub(crate) fn notify_one(&self) {
        self.0.notify_one();
    }

    pub(crate) fn notify_all(&self) {
        self.0.notify_all();
    }
}

// ==========================================================================================

#[cfg(not(loom))]
#[allow(unused_imports)]
pub(crate) use std::thread;
#[cfg(not(loom))]
#[allow(unused_imports)]
pub(crate) use std::sync::Arc;
#[cfg(not(loom))]
pub(crate) use parking_lot::{Condvar, Mutex, MutexGuard};
