use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for a cooperative, self-re-arming task.
///
/// The task checks [`StopSignal::is_stopped`] before doing work and before
/// re-arming itself; the owner calls [`StopSignal::stop`] on teardown.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Rc<Cell<bool>>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only for the call that actually stopped the task.
    pub fn stop(&self) -> bool {
        !self.0.replace(true)
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}
