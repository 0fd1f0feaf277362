//! Gesture controller: drives [`GestureControllerState`] from host events and writes drops to
//! an [`InputEngine`].

use crate::animation::clock::FrameClock;
use crate::engine::input::{InputEngine, InputValue};
use crate::foundation::config::ControllerConfig;
use crate::foundation::core::{Point, PointerSource, Vec2};
use crate::foundation::error::TesterResult;
use crate::gesture::state::{Effect, GestureControllerState, GestureEvent, Phase};
use crate::gesture::zoom::ZoomLevel;

/// Result of a drop, for callers that mirror input values elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropOutcome {
    /// Vertical offset at release.
    pub drop_y: f64,
    /// Value written to the release input, if a write happened and was accepted.
    pub written: Option<bool>,
}

/// Turns vertical drag gestures into a visual offset and a boolean state-machine input.
///
/// The controller owns the view state and a mirror of the release input. It never holds the
/// engine: operations that may write borrow it for the duration of the call.
#[derive(Debug)]
pub struct GestureInputController<C: FrameClock> {
    state: GestureControllerState,
    config: ControllerConfig,
    clock: C,
    target: Option<String>,
    mirror: Option<bool>,
}

impl<C: FrameClock> GestureInputController<C> {
    /// Controller with validated `config`, reading frame times from `clock`.
    pub fn new(config: ControllerConfig, clock: C) -> TesterResult<Self> {
        config.validate()?;
        Ok(Self {
            state: GestureControllerState::new(&config),
            config,
            clock,
            target: None,
            mirror: None,
        })
    }

    /// Tuning in use.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Clock the spring-back reads frame times from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Full view state.
    pub fn state(&self) -> &GestureControllerState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        self.state.phase()
    }

    /// Visual offset for the canvas transform.
    pub fn offset(&self) -> Vec2 {
        self.state.offset()
    }

    /// Zoom level for the canvas transform.
    pub fn zoom(&self) -> &ZoomLevel {
        self.state.zoom()
    }

    /// Offset recorded at the last drop.
    pub fn last_drop(&self) -> Vec2 {
        self.state.last_drop()
    }

    /// Whether a pointer currently owns a drag.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state.phase(), Phase::Dragging(_))
    }

    /// Whether the spring-back still needs paint ticks.
    pub fn is_animating(&self) -> bool {
        matches!(self.state.phase(), Phase::SpringingBack(_))
    }

    /// State machine the release input lives on.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Point drops at a different state machine (or none).
    pub fn retarget(&mut self, machine: Option<String>) {
        self.target = machine;
    }

    /// Last known value of the release input.
    pub fn mirror(&self) -> Option<bool> {
        self.mirror
    }

    /// Overwrite the mirror after the input changed through another path.
    pub fn sync_mirror(&mut self, value: Option<bool>) {
        self.mirror = value;
    }

    /// Pointer or touch down.
    pub fn begin_drag(&mut self, position: Point, source: PointerSource) {
        self.apply(GestureEvent::PointerDown { position, source });
    }

    /// Pointer or touch move.
    pub fn update_drag(&mut self, position: Point, source: PointerSource) {
        self.apply(GestureEvent::PointerMove { position, source });
    }

    /// Pointer or touch up: decide and write the release input, then spring back.
    ///
    /// Returns `None` when no drag was active.
    pub fn end_drag<E: InputEngine + ?Sized>(&mut self, engine: &mut E) -> Option<DropOutcome> {
        if !self.is_dragging() {
            tracing::trace!("end_drag ignored: not dragging");
            return None;
        }
        let current = self.read_release(engine);
        let now_ms = self.clock.now_ms();
        let effects = self
            .state
            .apply(GestureEvent::Release { current, now_ms }, &self.config);
        let drop_y = self.state.last_drop().y;
        tracing::debug!(drop_y, current, "drop");

        let mut written = None;
        for effect in effects {
            if let Some(v) = self.execute(engine, effect) {
                written = Some(v);
            }
        }
        Some(DropOutcome { drop_y, written })
    }

    /// Pointer leave or touch cancel. Handled exactly like [`Self::end_drag`].
    pub fn cancel_drag<E: InputEngine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Option<DropOutcome> {
        self.end_drag(engine)
    }

    /// Paint tick. Returns whether another frame is needed.
    pub fn tick(&mut self) -> bool {
        let now_ms = self.clock.now_ms();
        self.apply(GestureEvent::Frame { now_ms });
        self.is_animating()
    }

    /// Zoom by `steps` increments (negative zooms out).
    pub fn set_zoom(&mut self, steps: i32) {
        self.apply(GestureEvent::Zoom { steps });
    }

    /// One step in.
    pub fn zoom_in(&mut self) {
        self.set_zoom(1);
    }

    /// One step out.
    pub fn zoom_out(&mut self) {
        self.set_zoom(-1);
    }

    /// Wheel/scroll: scrolling down zooms out, up zooms in. Zero deltas are ignored.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.zoom_out();
        } else if delta_y < 0.0 {
            self.zoom_in();
        }
    }

    /// Back to origin, clear the last drop and restore the initial zoom.
    pub fn reset_view(&mut self) {
        self.apply(GestureEvent::ResetView);
    }

    /// Double-click on the canvas.
    pub fn double_click(&mut self) {
        self.reset_view();
    }

    /// New asset loaded: reset the view and forget the mirrored input.
    pub fn reset_for_new_asset(&mut self) {
        self.reset_view();
        self.mirror = None;
    }

    fn apply(&mut self, event: GestureEvent) {
        let effects = self.state.apply(event, &self.config);
        debug_assert!(effects.is_empty(), "only releases produce effects");
    }

    fn read_release<E: InputEngine + ?Sized>(&self, engine: &E) -> bool {
        let from_engine = self.target.as_deref().and_then(|machine| {
            match engine.input_value(machine, &self.config.release_input) {
                Ok(value) => value.as_bool(),
                Err(err) => {
                    tracing::debug!(%err, "release input unreadable; using mirror");
                    None
                }
            }
        });
        from_engine.or(self.mirror).unwrap_or(false)
    }

    fn execute<E: InputEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        effect: Effect,
    ) -> Option<bool> {
        match effect {
            Effect::SetBool { input, value } => {
                let Some(machine) = self.target.as_deref() else {
                    tracing::debug!(
                        input = input.as_str(),
                        value,
                        "no state machine selected; write skipped"
                    );
                    return None;
                };
                match engine.set_input_value(machine, &input, InputValue::Bool(value)) {
                    Ok(()) => {
                        tracing::info!(
                            machine,
                            input = input.as_str(),
                            value,
                            "release input written"
                        );
                        self.mirror = Some(value);
                        Some(value)
                    }
                    Err(err) if err.is_not_ready() => {
                        tracing::warn!(
                            machine,
                            input = input.as_str(),
                            %err,
                            "engine not ready; write skipped"
                        );
                        None
                    }
                    Err(err) => {
                        tracing::warn!(
                            machine,
                            input = input.as_str(),
                            %err,
                            "release input write failed"
                        );
                        None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/controller.rs"]
mod tests;
