//! The seam between the controller and the embedding application.
//!
//! The controller never owns an event loop. It asks its [`TimerHost`]
//! to fire a callback at a fixed interval and to repaint whatever view
//! the host maintains; the host calls back into
//! [`RunController::on_tick`](crate::RunController::on_tick) each time
//! the timer fires. A GUI host wires these to its toolkit's timer and
//! invalidation APIs; tests substitute a recording double.

use std::time::Duration;

use phys_core::TimerHandle;

/// Timer and repaint services provided by the embedding application.
///
/// Implementations hand out a fresh [`TimerHandle`] per registration
/// and must treat `cancel_tick` with an unknown handle as a no-op, so
/// a late cancel after host-side teardown stays harmless.
pub trait TimerHost {
    /// Start a repeating timer that fires every `interval`.
    fn register_tick(&mut self, interval: Duration) -> TimerHandle;

    /// Cancel a timer previously returned by [`register_tick`].
    ///
    /// [`register_tick`]: TimerHost::register_tick
    fn cancel_tick(&mut self, handle: TimerHandle);

    /// Ask the host to repaint its view of the simulation.
    fn request_redraw(&mut self);
}

/// Host that fulfils the contract while doing nothing.
///
/// Handles are still unique so the controller's bookkeeping behaves
/// exactly as it would against a real host. Useful for headless runs
/// that drive [`on_tick`](crate::RunController::on_tick) from a plain
/// loop instead of a timer.
#[derive(Debug, Default)]
pub struct NoopHost {
    next_handle: u64,
}

impl TimerHost for NoopHost {
    fn register_tick(&mut self, _interval: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn cancel_tick(&mut self, _handle: TimerHandle) {}

    fn request_redraw(&mut self) {}
}
