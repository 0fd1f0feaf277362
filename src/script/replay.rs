//! Scripted replay of recorded canvas and panel events against a [`TesterSession`].

use crate::animation::clock::{FrameClock, ManualClock};
use crate::engine::input::InputValue;
use crate::engine::runtime::PlaybackRuntime;
use crate::foundation::config::{open_json, read_json};
use crate::foundation::core::{MouseButton, Point, PointerSource};
use crate::foundation::error::{TesterError, TesterResult};
use crate::tester::session::{TesterSession, ViewState};
use std::path::Path;

/// Touch identifier used for scripted touch steps.
const SCRIPT_TOUCH_ID: u64 = 0;

/// Most paint frames a single `advance` step may request.
const MAX_ADVANCE_FRAMES: f64 = 1_000_000.0;

/// One host event (or clock advance) in a gesture script.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Mouse button pressed.
    MouseDown {
        /// Pointer x.
        x: f64,
        /// Pointer y.
        y: f64,
        /// Button, primary when omitted.
        #[serde(default)]
        button: MouseButton,
    },
    /// Mouse moved.
    MouseMove {
        /// Pointer x.
        x: f64,
        /// Pointer y.
        y: f64,
    },
    /// Mouse button released.
    MouseUp,
    /// Mouse left the canvas.
    MouseLeave,
    /// Touch started.
    TouchStart {
        /// Touch x.
        x: f64,
        /// Touch y.
        y: f64,
        /// Touches on the surface, one when omitted.
        #[serde(default = "one")]
        touches: u32,
    },
    /// Touch moved.
    TouchMove {
        /// Touch x.
        x: f64,
        /// Touch y.
        y: f64,
        /// Touches on the surface, one when omitted.
        #[serde(default = "one")]
        touches: u32,
    },
    /// Touch ended.
    TouchEnd,
    /// Touch cancelled by the host.
    TouchCancel,
    /// Wheel scrolled.
    Wheel {
        /// Vertical wheel delta; positive scrolls down.
        delta_y: f64,
    },
    /// Zoom-in button.
    ZoomIn,
    /// Zoom-out button.
    ZoomOut,
    /// Reset-view button.
    ResetView,
    /// Double-click on the canvas.
    DoubleClick,
    /// Let time pass, ticking once per frame.
    Advance {
        /// Milliseconds to advance.
        ms: f64,
    },
    /// Write an input from the panel.
    SetInput {
        /// Input name.
        name: String,
        /// Value to write.
        value: InputValue,
    },
    /// Fire a trigger from the panel.
    Trigger {
        /// Input name.
        name: String,
    },
}

fn one() -> u32 {
    1
}

/// Ordered list of script steps.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GestureScript {
    /// Steps, applied in order.
    pub steps: Vec<ScriptStep>,
}

impl GestureScript {
    /// Parse a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TesterResult<Self> {
        read_json(r, "gesture script")
    }

    /// Parse a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TesterResult<Self> {
        Self::from_reader(open_json(path.as_ref(), "gesture script")?)
    }
}

/// State after one step.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TraceEntry {
    /// Index into the script.
    pub step: usize,
    /// Clock reading after the step.
    pub time_ms: f64,
    /// Canvas readout after the step.
    pub view: ViewState,
}

/// Result of replaying a script.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ReplayTrace {
    /// One entry per step.
    pub entries: Vec<TraceEntry>,
    /// Paint ticks issued by `advance` steps.
    pub frames: u64,
}

/// Feed `script` into `session`, stepping the session's clock in `frame_ms` increments on
/// `advance`.
///
/// Frames are only ticked while the spring-back runs; idle time is skipped in one jump.
/// Drops that hit an unready engine are not errors; panel steps (`set_input`, `trigger`) that
/// the runtime rejects are.
#[tracing::instrument(skip(session, script), fields(steps = script.steps.len()))]
pub fn replay<R: PlaybackRuntime>(
    session: &mut TesterSession<R, ManualClock>,
    script: &GestureScript,
    frame_ms: f64,
) -> TesterResult<ReplayTrace> {
    if !(frame_ms.is_finite() && frame_ms > 0.0) {
        return Err(TesterError::script(format!(
            "frame_ms must be > 0, got {frame_ms}"
        )));
    }
    let clock = session.clock().clone();
    let mut trace = ReplayTrace::default();
    for (idx, step) in script.steps.iter().enumerate() {
        match step {
            ScriptStep::MouseDown { x, y, button } => session.begin_drag(
                Point::new(*x, *y),
                PointerSource::Mouse { button: *button },
            ),
            ScriptStep::MouseMove { x, y } => {
                session.update_drag(Point::new(*x, *y), PointerSource::primary_mouse());
            }
            ScriptStep::MouseUp => {
                session.end_drag();
            }
            ScriptStep::MouseLeave | ScriptStep::TouchCancel => {
                session.cancel_drag();
            }
            ScriptStep::TouchStart { x, y, touches } => session.begin_drag(
                Point::new(*x, *y),
                PointerSource::Touch {
                    id: SCRIPT_TOUCH_ID,
                    touches: *touches,
                },
            ),
            ScriptStep::TouchMove { x, y, touches } => session.update_drag(
                Point::new(*x, *y),
                PointerSource::Touch {
                    id: SCRIPT_TOUCH_ID,
                    touches: *touches,
                },
            ),
            ScriptStep::TouchEnd => {
                session.end_drag();
            }
            ScriptStep::Wheel { delta_y } => session.wheel(*delta_y),
            ScriptStep::ZoomIn => session.zoom_in(),
            ScriptStep::ZoomOut => session.zoom_out(),
            ScriptStep::ResetView => session.reset_view(),
            ScriptStep::DoubleClick => session.double_click(),
            ScriptStep::Advance { ms } => {
                if !(ms.is_finite() && *ms >= 0.0) {
                    return Err(TesterError::script(format!(
                        "step {idx}: advance must be >= 0, got {ms}"
                    )));
                }
                if (ms / frame_ms).ceil() > MAX_ADVANCE_FRAMES {
                    return Err(TesterError::script(format!(
                        "step {idx}: advance of {ms}ms at {frame_ms}ms per frame exceeds \
                         {MAX_ADVANCE_FRAMES} frames"
                    )));
                }
                let mut left = *ms;
                while left > 0.0 {
                    if !session.gestures().is_animating() {
                        clock.advance(left);
                        break;
                    }
                    let dt = left.min(frame_ms);
                    clock.advance(dt);
                    left -= dt;
                    session.tick();
                    trace.frames += 1;
                }
            }
            ScriptStep::SetInput { name, value } => session
                .update_input(name, *value)
                .map_err(|e| TesterError::script(format!("step {idx}: {e}")))?,
            ScriptStep::Trigger { name } => session
                .trigger_input(name)
                .map_err(|e| TesterError::script(format!("step {idx}: {e}")))?,
        }
        trace.entries.push(TraceEntry {
            step: idx,
            time_ms: clock.now_ms(),
            view: session.view(),
        });
    }
    Ok(trace)
}

#[cfg(test)]
#[path = "../../tests/unit/script/replay.rs"]
mod tests;
