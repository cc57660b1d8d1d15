//! Frame scheduling: one repeating timer, engaged at most once.

use std::time::Duration;

use phys_core::TimerHandle;

use crate::host::TimerHost;

/// Owns the tick interval and the handle of the registered timer.
///
/// The handle lives in an `Option` so that disengaging is idempotent:
/// the first call takes the handle and cancels it, later calls find
/// `None` and do nothing. The controller leans on this to keep the
/// "cancel exactly once" guarantee even when a halt races a stale tick.
#[derive(Debug)]
pub struct FrameScheduler {
    interval: Duration,
    handle:   Option<TimerHandle>,
}

impl FrameScheduler {
    /// Build a scheduler ticking `frame_rate` times per second.
    ///
    /// A rate of zero would divide by zero; it is lifted to one tick
    /// per second. Validated parameters never carry a zero rate, the
    /// guard covers direct construction.
    pub fn new(frame_rate: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(frame_rate.max(1))),
            handle:   None,
        }
    }

    /// Time between consecutive ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a timer is currently registered.
    pub fn is_engaged(&self) -> bool {
        self.handle.is_some()
    }

    /// Register the repeating timer with `host`.
    ///
    /// Engaging an already-engaged scheduler keeps the existing timer;
    /// at most one registration is live at a time.
    pub fn engage<H: TimerHost>(&mut self, host: &mut H) {
        if self.handle.is_none() {
            self.handle = Some(host.register_tick(self.interval));
        }
    }

    /// Cancel the timer, if one is registered.
    pub fn disengage<H: TimerHost>(&mut self, host: &mut H) {
        if let Some(handle) = self.handle.take() {
            host.cancel_tick(handle);
        }
    }
}
