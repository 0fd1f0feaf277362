use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Time source read once per paint tick.
///
/// The host calls the controller's `tick` once per display refresh; the clock only answers
/// "what time is it", so tests can swap in [`ManualClock`] and step frames synchronously.
pub trait FrameClock {
    /// Monotonic milliseconds since an arbitrary origin.
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock whose origin is "now".
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock. Clones share the same time cell.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Clock starting at `start_ms`.
    pub fn starting_at(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    /// Move time forward by `ms` (negative values are ignored).
    pub fn advance(&self, ms: f64) {
        if ms > 0.0 {
            self.now.set(self.now.get() + ms);
        }
    }

    /// Jump to an absolute time; never moves backwards.
    pub fn set(&self, ms: f64) {
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
