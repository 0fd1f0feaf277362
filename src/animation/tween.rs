use crate::animation::ease::Ease;

/// Fixed-duration scalar tween sampled against an external clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    started_at_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

/// Value of a tween at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSample {
    /// Interpolated value; exactly `to` once finished.
    pub value: f64,
    /// Normalized, clamped progress.
    pub progress: f64,
    /// `progress >= 1`.
    pub finished: bool,
}

impl Tween {
    /// Start a tween at `started_at_ms`. A non-positive duration finishes immediately.
    pub fn new(from: f64, to: f64, started_at_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            started_at_ms,
            duration_ms,
            ease,
        }
    }

    /// Start value.
    pub fn from(&self) -> f64 {
        self.from
    }

    /// End value.
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Clock reading the tween started at.
    pub fn started_at_ms(&self) -> f64 {
        self.started_at_ms
    }

    /// Normalized progress at `now_ms`, clamped to `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Sample the tween at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> TweenSample {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return TweenSample {
                value: self.to,
                progress: 1.0,
                finished: true,
            };
        }
        let eased = self.ease.apply(progress);
        TweenSample {
            value: self.from + (self.to - self.from) * eased,
            progress,
            finished: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
