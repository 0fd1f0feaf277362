use crate::foundation::config::ZoomConfig;

/// Canvas zoom, kept as a whole number of steps away from the initial level.
///
/// Counting steps instead of accumulating `+= 0.1` keeps repeated zooming from drifting
/// past the bounds through floating-point error.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomLevel {
    steps: i32,
    min_steps: i32,
    max_steps: i32,
    cfg: ZoomConfig,
}

impl ZoomLevel {
    /// Zoom at `cfg.initial`.
    pub fn new(cfg: &ZoomConfig) -> Self {
        // Off-grid bounds round outwards; `value()` clamps the last step.
        const SLOP: f64 = 1e-9;
        let to_steps = |bound: f64| (bound - cfg.initial) / cfg.step;
        Self {
            steps: 0,
            min_steps: ((to_steps(cfg.min) + SLOP).floor() as i32).min(0),
            max_steps: ((to_steps(cfg.max) - SLOP).ceil() as i32).max(0),
            cfg: cfg.clone(),
        }
    }

    /// Scale factor, always within `[min, max]`.
    pub fn value(&self) -> f64 {
        (self.cfg.initial + f64::from(self.steps) * self.cfg.step).clamp(self.cfg.min, self.cfg.max)
    }

    /// Rounded percentage for the on-screen indicator.
    pub fn percent(&self) -> u32 {
        (self.value() * 100.0).round() as u32
    }

    /// Lowest level reached; the zoom-out button is disabled.
    pub fn at_min(&self) -> bool {
        self.steps <= self.min_steps
    }

    /// Highest level reached; the zoom-in button is disabled.
    pub fn at_max(&self) -> bool {
        self.steps >= self.max_steps
    }

    /// Move by `delta` steps, clamped. Returns whether the level changed.
    pub fn step_by(&mut self, delta: i32) -> bool {
        let next = self
            .steps
            .saturating_add(delta)
            .clamp(self.min_steps, self.max_steps);
        let changed = next != self.steps;
        self.steps = next;
        changed
    }

    /// One step in.
    pub fn zoom_in(&mut self) -> bool {
        self.step_by(1)
    }

    /// One step out.
    pub fn zoom_out(&mut self) -> bool {
        self.step_by(-1)
    }

    /// Back to the initial level.
    pub fn reset(&mut self) {
        self.steps = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/zoom.rs"]
mod tests;
