use super::WaitGroup;

/// Signals one completion on its [`WaitGroup`](crate::WaitGroup) when dropped
///
/// The completion is signaled whether the holder returns normally or unwinds from a panic,
/// so a failing task never leaves its waiters blocked.
#[must_use = "the completion is signaled as soon as the guard is dropped"]
pub struct DoneGuard {
    wait_group: WaitGroup,
}

impl DoneGuard {
    pub(crate) fn new(wait_group: WaitGroup) -> Self {
        Self { wait_group }
    }
}

impl Drop for DoneGuard {
    fn drop(&mut self) {
        self.wait_group.done();
    }
}
