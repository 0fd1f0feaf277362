/// Easing curve applied to a tween's normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    /// No easing.
    Linear,
    /// Quadratic deceleration.
    OutQuad,
    /// Cubic deceleration, used by the drop spring-back.
    #[default]
    OutCubic,
}

impl Ease {
    /// Map `t` (clamped to `[0, 1]`) through the curve. Endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
