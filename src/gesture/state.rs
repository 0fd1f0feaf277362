//! Pure gesture state: events in, state mutation and engine effects out.
//!
//! Nothing here talks to the engine or reads a clock. Values that come from the outside world
//! (the current release-input value, the frame time) travel inside the events, so every
//! transition is deterministic and testable without a host.

use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::foundation::config::ControllerConfig;
use crate::foundation::core::{Point, PointerId, PointerSource, Vec2, vertical_offset};
use crate::gesture::zoom::ZoomLevel;

/// Live pointer grab. Exists exactly while the phase is [`Phase::Dragging`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSession {
    /// Pointer position minus the visual offset at drag start.
    pub origin_offset: Vec2,
    /// Pointer that owns the session.
    pub pointer: PointerId,
}

/// Controller phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Resting at the current offset.
    Idle,
    /// A pointer is dragging the canvas.
    Dragging(PointerSession),
    /// Returning to the origin after a drop.
    SpringingBack(Tween),
}

impl Phase {
    /// Short lowercase name for readouts and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
            Self::SpringingBack(_) => "springing_back",
        }
    }
}

/// Input to [`GestureControllerState::apply`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Pointer or touch down.
    PointerDown {
        /// Pointer position.
        position: Point,
        /// Device details.
        source: PointerSource,
    },
    /// Pointer or touch move.
    PointerMove {
        /// Pointer position.
        position: Point,
        /// Device details.
        source: PointerSource,
    },
    /// Pointer up, pointer leave or touch end/cancel.
    Release {
        /// Release-input value read just before the decision.
        current: bool,
        /// Frame time the spring-back starts at.
        now_ms: f64,
    },
    /// Paint tick.
    Frame {
        /// Frame time.
        now_ms: f64,
    },
    /// Zoom by a number of steps (positive zooms in).
    Zoom {
        /// Step count.
        steps: i32,
    },
    /// Clear offset, last drop and zoom.
    ResetView,
}

/// Side effect requested by a transition, executed by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Write a boolean state-machine input.
    SetBool {
        /// Input name.
        input: String,
        /// Value to write.
        value: bool,
    },
}

/// Everything the controller owns, apart from the engine mirror.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureControllerState {
    phase: Phase,
    offset: Vec2,
    zoom: ZoomLevel,
    last_drop: Vec2,
}

impl GestureControllerState {
    /// Idle state at the origin with the configured initial zoom.
    pub fn new(cfg: &ControllerConfig) -> Self {
        Self {
            phase: Phase::Idle,
            offset: Vec2::ZERO,
            zoom: ZoomLevel::new(&cfg.zoom),
            last_drop: Vec2::ZERO,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Visual offset; `x` is always zero and `y` never negative.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Zoom level.
    pub fn zoom(&self) -> &ZoomLevel {
        &self.zoom
    }

    /// Offset recorded at the most recent drop.
    pub fn last_drop(&self) -> Vec2 {
        self.last_drop
    }

    /// The active drag session, if any.
    pub fn session(&self) -> Option<&PointerSession> {
        match &self.phase {
            Phase::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Apply one event and return the engine writes it calls for.
    ///
    /// Events that do not fit the current phase are ignored.
    pub fn apply(&mut self, event: GestureEvent, cfg: &ControllerConfig) -> Vec<Effect> {
        match event {
            GestureEvent::PointerDown { position, source } => {
                self.pointer_down(position, source);
                Vec::new()
            }
            GestureEvent::PointerMove { position, source } => {
                self.pointer_move(position, source);
                Vec::new()
            }
            GestureEvent::Release { current, now_ms } => self.release(current, now_ms, cfg),
            GestureEvent::Frame { now_ms } => {
                self.frame(now_ms);
                Vec::new()
            }
            GestureEvent::Zoom { steps } => {
                self.zoom.step_by(steps);
                Vec::new()
            }
            GestureEvent::ResetView => {
                self.phase = Phase::Idle;
                self.offset = Vec2::ZERO;
                self.last_drop = Vec2::ZERO;
                self.zoom.reset();
                Vec::new()
            }
        }
    }

    fn pointer_down(&mut self, position: Point, source: PointerSource) {
        if let Phase::Dragging(session) = &self.phase {
            tracing::trace!(owner = ?session.pointer, "pointer down ignored: drag in progress");
            return;
        }
        if !source.can_start_drag() {
            tracing::trace!(?source, "pointer down ignored: not a drag source");
            return;
        }
        if matches!(self.phase, Phase::SpringingBack(_)) {
            tracing::debug!(y = self.offset.y, "spring-back interrupted by new drag");
        }
        self.phase = Phase::Dragging(PointerSession {
            origin_offset: position.to_vec2() - self.offset,
            pointer: source.pointer_id(),
        });
    }

    fn pointer_move(&mut self, position: Point, source: PointerSource) {
        let Phase::Dragging(session) = &self.phase else {
            tracing::trace!("pointer move ignored: not dragging");
            return;
        };
        if session.pointer != source.pointer_id() || !source.can_move_drag() {
            return;
        }
        self.offset = vertical_offset(position.y - session.origin_offset.y);
    }

    fn release(&mut self, current: bool, now_ms: f64, cfg: &ControllerConfig) -> Vec<Effect> {
        if !matches!(self.phase, Phase::Dragging(_)) {
            tracing::trace!("release ignored: not dragging");
            return Vec::new();
        }
        let drop_y = self.offset.y;
        self.last_drop = vertical_offset(drop_y);

        let next = if current {
            Some(false)
        } else if drop_y >= cfg.release_threshold {
            Some(true)
        } else {
            None
        };
        let effects = next
            .map(|value| Effect::SetBool {
                input: cfg.release_input.clone(),
                value,
            })
            .into_iter()
            .collect();

        self.phase = if drop_y > 0.0 {
            Phase::SpringingBack(Tween::new(
                drop_y,
                0.0,
                now_ms,
                cfg.spring_back_ms,
                Ease::OutCubic,
            ))
        } else {
            Phase::Idle
        };
        effects
    }

    fn frame(&mut self, now_ms: f64) {
        let Phase::SpringingBack(tween) = &self.phase else {
            return;
        };
        let sample = tween.sample(now_ms);
        if sample.finished {
            self.offset = Vec2::ZERO;
            self.phase = Phase::Idle;
        } else {
            self.offset = vertical_offset(sample.value);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/state.rs"]
mod tests;
