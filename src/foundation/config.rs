use crate::foundation::error::{TesterError, TesterResult};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Zoom limits for the canvas transform.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZoomConfig {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Increment applied by one zoom-in/zoom-out command or wheel notch.
    pub step: f64,
    /// Zoom used on asset load and by `reset_view`.
    pub initial: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.6,
            max: 1.4,
            step: 0.1,
            initial: 1.0,
        }
    }
}

/// Tuning for the gesture controller.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Boolean state-machine input flipped by drops.
    pub release_input: String,
    /// Minimum drop distance (inclusive) to flip the input from false to true.
    pub release_threshold: f64,
    /// Duration of the spring-back tween in milliseconds.
    pub spring_back_ms: f64,
    /// Zoom limits.
    pub zoom: ZoomConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            release_input: "MouseRelease".to_owned(),
            release_threshold: 100.0,
            spring_back_ms: 300.0,
            zoom: ZoomConfig::default(),
        }
    }
}

impl ControllerConfig {
    /// Reject values the controller cannot operate with.
    pub fn validate(&self) -> TesterResult<()> {
        if self.release_input.is_empty() {
            return Err(TesterError::validation("release_input must not be empty"));
        }
        if !self.release_threshold.is_finite() || self.release_threshold < 0.0 {
            return Err(TesterError::validation(format!(
                "release_threshold must be a finite value >= 0, got {}",
                self.release_threshold
            )));
        }
        if !self.spring_back_ms.is_finite() || self.spring_back_ms <= 0.0 {
            return Err(TesterError::validation(format!(
                "spring_back_ms must be > 0, got {}",
                self.spring_back_ms
            )));
        }
        let z = &self.zoom;
        if !(z.step.is_finite() && z.step > 0.0) {
            return Err(TesterError::validation("zoom.step must be > 0"));
        }
        if !(z.min > 0.0 && z.min <= z.initial && z.initial <= z.max) {
            return Err(TesterError::validation(format!(
                "zoom bounds must satisfy 0 < min <= initial <= max, got min={} initial={} max={}",
                z.min, z.initial, z.max
            )));
        }
        Ok(())
    }
}

/// Options for the manual-testing panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TesterOptions {
    /// Number input on the first state machine driven by `set_speed`.
    pub speed_input: String,
    /// Slider lower bound for number inputs.
    pub slider_min: f64,
    /// Slider upper bound for number inputs.
    pub slider_max: f64,
    /// Slider increment for number inputs.
    pub slider_step: f64,
    /// Gesture controller tuning.
    pub controller: ControllerConfig,
}

impl Default for TesterOptions {
    fn default() -> Self {
        Self {
            speed_input: "Speed".to_owned(),
            slider_min: 0.0,
            slider_max: 100.0,
            slider_step: 1.0,
            controller: ControllerConfig::default(),
        }
    }
}

impl TesterOptions {
    /// Parse options from a JSON reader and validate them.
    pub fn from_reader<R: std::io::Read>(r: R) -> TesterResult<Self> {
        let opts: Self = read_json(r, "tester options")?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TesterResult<Self> {
        Self::from_reader(open_json(path.as_ref(), "tester options")?)
    }

    /// Reject inconsistent slider bounds or controller tuning.
    pub fn validate(&self) -> TesterResult<()> {
        if !(self.slider_min < self.slider_max) {
            return Err(TesterError::validation(format!(
                "slider_min must be < slider_max, got {} and {}",
                self.slider_min, self.slider_max
            )));
        }
        if !(self.slider_step > 0.0) {
            return Err(TesterError::validation("slider_step must be > 0"));
        }
        self.controller.validate()
    }
}

pub(crate) fn open_json(path: &Path, what: &str) -> TesterResult<BufReader<File>> {
    let f = File::open(path).map_err(|e| {
        TesterError::validation(format!("open {what} JSON '{}': {e}", path.display()))
    })?;
    Ok(BufReader::new(f))
}

pub(crate) fn read_json<T: DeserializeOwned, R: std::io::Read>(
    r: R,
    what: &str,
) -> TesterResult<T> {
    serde_json::from_reader(r).map_err(|e| TesterError::serde(format!("parse {what} JSON: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
