use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

use super::DoneGuard;

/// Wait Group
///
/// A completion counter shared between a coordinating thread and the tasks it launched.
///
/// Pending completions are registered with ``add()``, each finished task calls ``done()``
/// exactly once and ``wait()`` blocks the calling thread until every registered completion
/// has been signaled.
///
/// Cloning a ``WaitGroup`` yields another handle onto the same counter.
///
/// # Example
///
/// ```rust
/// use greet_groups::WaitGroup;
/// use std::thread;
///
/// let wait_group = WaitGroup::new();
/// wait_group.add(3);
/// for _ in 0..3 {
///     let wait_group = wait_group.clone();
///     thread::spawn(move || {
///         // some work
///         wait_group.done();
///     });
/// }
/// wait_group.wait();
/// assert_eq!(wait_group.pending(), 0);
/// ```
#[derive(Clone, Default)]
pub struct WaitGroup {
    pair: Arc<(Mutex<usize>, Condvar)>,
}

impl WaitGroup {
    /// Creates a wait group with nothing pending
    pub fn new() -> Self {
        Self::default()
    }
}

impl WaitGroup {
    /// Registers `count` more pending completions
    pub fn add(&self, count: usize) {
        *self.pair.0.lock() += count;
    }

    /// Signals that one pending completion has finished,
    /// waking every waiter once nothing is left pending
    pub fn done(&self) {
        let mut guard = self.pair.0.lock();
        let Some(remaining) = guard.checked_sub(1) else {
            log::warn!("WaitGroup::done called with nothing pending");
            return;
        };
        *guard = remaining;
        if remaining == 0 {
            self.pair.1.notify_all();
        }
    }

    /// Blocks the current thread until nothing is pending
    pub fn wait(&self) {
        let mut guard = self.pair.0.lock();
        while *guard > 0 {
            self.pair.1.wait(&mut guard);
        }
    }

    /// Guard calling ``done()`` once when it goes out of scope, even while unwinding
    pub fn done_guard(&self) -> DoneGuard {
        DoneGuard::new(self.clone())
    }

    /// Number of completions still outstanding
    pub fn pending(&self) -> usize {
        *self.pair.0.lock()
    }
}
