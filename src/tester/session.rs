//! Manual-testing session: asset content, the input panel, playback and the gesture canvas.

use crate::animation::clock::FrameClock;
use crate::engine::input::{InputDescriptor, InputKind, InputValue};
use crate::engine::runtime::PlaybackRuntime;
use crate::foundation::config::TesterOptions;
use crate::foundation::core::{Point, PointerSource};
use crate::foundation::error::{TesterError, TesterResult};
use crate::gesture::controller::{DropOutcome, GestureInputController};
use crate::tester::controls::InputControl;
use std::collections::BTreeMap;

/// Serializable readout of the canvas and playback state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ViewState {
    /// Horizontal offset (always zero).
    pub offset_x: f64,
    /// Vertical offset.
    pub offset_y: f64,
    /// Zoom factor.
    pub zoom: f64,
    /// Zoom as a rounded percentage.
    pub zoom_percent: u32,
    /// Zoom-out disabled.
    pub zoom_at_min: bool,
    /// Zoom-in disabled.
    pub zoom_at_max: bool,
    /// Vertical offset at the last drop.
    pub last_drop_y: f64,
    /// Controller phase name.
    pub phase: String,
    /// Playback running.
    pub playing: bool,
    /// Cached value of the release input.
    pub release: Option<bool>,
}

/// Manual-testing panel for one loaded asset.
///
/// Owns the runtime and the gesture controller and keeps a cache of input values for the
/// generated controls.
pub struct TesterSession<R: PlaybackRuntime, C: FrameClock> {
    runtime: R,
    options: TesterOptions,
    gestures: GestureInputController<C>,
    animations: Vec<String>,
    state_machines: Vec<String>,
    selected: Option<String>,
    inputs: Vec<InputDescriptor>,
    values: BTreeMap<String, InputValue>,
    speed: f64,
}

impl<R: PlaybackRuntime, C: FrameClock> TesterSession<R, C> {
    /// Open a session on `runtime` and inspect its content.
    pub fn new(runtime: R, options: TesterOptions, clock: C) -> TesterResult<Self> {
        options.validate()?;
        let gestures = GestureInputController::new(options.controller.clone(), clock)?;
        let mut session = Self {
            runtime,
            options,
            gestures,
            animations: Vec::new(),
            state_machines: Vec::new(),
            selected: None,
            inputs: Vec::new(),
            values: BTreeMap::new(),
            speed: 0.0,
        };
        session.extract_content()?;
        Ok(session)
    }

    /// Swap in a newly loaded asset, resetting panel and view state.
    #[tracing::instrument(skip(self, runtime))]
    pub fn load_asset(&mut self, runtime: R) -> TesterResult<()> {
        self.runtime = runtime;
        self.animations.clear();
        self.state_machines.clear();
        self.selected = None;
        self.inputs.clear();
        self.values.clear();
        self.gestures.retarget(None);
        self.gestures.reset_for_new_asset();
        self.extract_content()
    }

    /// List animations and state machines, then select and play the first state machine.
    pub fn extract_content(&mut self) -> TesterResult<()> {
        self.animations = self.runtime.animation_names();
        self.state_machines = self.runtime.state_machine_names();
        tracing::debug!(
            animations = self.animations.len(),
            state_machines = self.state_machines.len(),
            "asset content extracted"
        );
        match self.state_machines.first().cloned() {
            Some(first) => self.select_state_machine(&first),
            None => Ok(()),
        }
    }

    /// Play `name` and point the inputs panel and gestures at it.
    #[tracing::instrument(skip(self))]
    pub fn select_state_machine(&mut self, name: &str) -> TesterResult<()> {
        if !self.state_machines.iter().any(|sm| sm == name) {
            return Err(TesterError::validation(format!(
                "unknown state machine '{name}'"
            )));
        }
        self.runtime.play(Some(name))?;
        self.selected = Some(name.to_owned());
        self.gestures.retarget(Some(name.to_owned()));
        self.refresh_inputs()
    }

    /// Re-read inputs of the selected state machine into the cache.
    pub fn refresh_inputs(&mut self) -> TesterResult<()> {
        self.inputs.clear();
        self.values.clear();
        if let Some(machine) = self.selected.as_deref() {
            match self.runtime.list_inputs(machine) {
                Ok(inputs) => self.inputs = inputs,
                Err(err) if err.is_not_ready() => {
                    tracing::debug!(machine, %err, "inputs not available yet");
                }
                Err(err) => return Err(err),
            }
        }
        self.values = self
            .inputs
            .iter()
            .filter_map(|i| i.value.map(|v| (i.name.clone(), v)))
            .collect();
        let mirrored = self.release_value();
        self.gestures.sync_mirror(mirrored);
        Ok(())
    }

    /// Write a boolean or number input on the selected state machine.
    #[tracing::instrument(skip(self))]
    pub fn update_input(&mut self, name: &str, value: InputValue) -> TesterResult<()> {
        let machine = self.require_selected()?;
        self.runtime.set_input_value(&machine, name, value)?;
        self.values.insert(name.to_owned(), value);
        if name == self.gestures.config().release_input {
            self.gestures.sync_mirror(value.as_bool());
        }
        Ok(())
    }

    /// Fire a trigger input on the selected state machine.
    #[tracing::instrument(skip(self))]
    pub fn trigger_input(&mut self, name: &str) -> TesterResult<()> {
        let machine = self.require_selected()?;
        self.runtime.fire_trigger(&machine, name)
    }

    /// Resume playback.
    pub fn play(&mut self) -> TesterResult<()> {
        self.runtime.play(None)
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        self.runtime.pause();
    }

    /// Rewind and reload input defaults.
    pub fn reset(&mut self) -> TesterResult<()> {
        self.runtime.reset();
        self.refresh_inputs()
    }

    /// Play a linear animation by name.
    pub fn play_animation(&mut self, name: &str) -> TesterResult<()> {
        if !self.animations.iter().any(|a| a == name) {
            return Err(TesterError::validation(format!("unknown animation '{name}'")));
        }
        self.runtime.play(Some(name))
    }

    /// Drive the speed input of the first state machine. Returns whether it was written.
    pub fn set_speed(&mut self, value: f64) -> TesterResult<bool> {
        self.speed = value;
        let Some(first) = self.state_machines.first().cloned() else {
            return Ok(false);
        };
        let speed_input = self.options.speed_input.clone();
        let has_speed = match self.runtime.list_inputs(&first) {
            Ok(inputs) => inputs
                .iter()
                .any(|i| i.name == speed_input && i.kind == InputKind::Number),
            Err(err) if err.is_not_ready() => false,
            Err(err) => return Err(err),
        };
        if !has_speed {
            return Ok(false);
        }
        let value = InputValue::Number(value);
        self.runtime.set_input_value(&first, &speed_input, value)?;
        if self.selected.as_deref() == Some(first.as_str()) {
            self.values.insert(speed_input, value);
        }
        Ok(true)
    }

    /// Controls for the selected state machine's inputs, in declaration order.
    pub fn controls(&self) -> Vec<InputControl> {
        self.inputs
            .iter()
            .map(|i| InputControl::for_input(i, self.values.get(&i.name).copied(), &self.options))
            .collect()
    }

    /// Pointer or touch down on the canvas.
    pub fn begin_drag(&mut self, position: Point, source: PointerSource) {
        self.gestures.begin_drag(position, source);
    }

    /// Pointer or touch move on the canvas.
    pub fn update_drag(&mut self, position: Point, source: PointerSource) {
        self.gestures.update_drag(position, source);
    }

    /// Pointer or touch up on the canvas.
    pub fn end_drag(&mut self) -> Option<DropOutcome> {
        let outcome = self.gestures.end_drag(&mut self.runtime);
        self.record_drop(outcome);
        outcome
    }

    /// Pointer leave or touch cancel on the canvas.
    pub fn cancel_drag(&mut self) -> Option<DropOutcome> {
        let outcome = self.gestures.cancel_drag(&mut self.runtime);
        self.record_drop(outcome);
        outcome
    }

    /// Paint tick. Returns whether another frame is needed.
    pub fn tick(&mut self) -> bool {
        self.gestures.tick()
    }

    /// Zoom-in button.
    pub fn zoom_in(&mut self) {
        self.gestures.zoom_in();
    }

    /// Zoom-out button.
    pub fn zoom_out(&mut self) {
        self.gestures.zoom_out();
    }

    /// Wheel over the canvas.
    pub fn wheel(&mut self, delta_y: f64) {
        self.gestures.wheel(delta_y);
    }

    /// Reset-view button.
    pub fn reset_view(&mut self) {
        self.gestures.reset_view();
    }

    /// Double-click on the canvas.
    pub fn double_click(&mut self) {
        self.gestures.double_click();
    }

    /// Current canvas and playback readout.
    pub fn view(&self) -> ViewState {
        let g = &self.gestures;
        ViewState {
            offset_x: g.offset().x,
            offset_y: g.offset().y,
            zoom: g.zoom().value(),
            zoom_percent: g.zoom().percent(),
            zoom_at_min: g.zoom().at_min(),
            zoom_at_max: g.zoom().at_max(),
            last_drop_y: g.last_drop().y,
            phase: g.phase().name().to_owned(),
            playing: self.runtime.is_playing(),
            release: self.release_value(),
        }
    }

    /// The owned runtime.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// The gesture controller.
    pub fn gestures(&self) -> &GestureInputController<C> {
        &self.gestures
    }

    /// Clock shared with the gesture controller.
    pub fn clock(&self) -> &C {
        self.gestures.clock()
    }

    /// Options in use.
    pub fn options(&self) -> &TesterOptions {
        &self.options
    }

    /// Animation names of the loaded asset.
    pub fn animations(&self) -> &[String] {
        &self.animations
    }

    /// State machine names of the loaded asset.
    pub fn state_machines(&self) -> &[String] {
        &self.state_machines
    }

    /// Selected state machine.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Input snapshot of the selected state machine.
    pub fn inputs(&self) -> &[InputDescriptor] {
        &self.inputs
    }

    /// Cached value of an input.
    pub fn value(&self, name: &str) -> Option<InputValue> {
        self.values.get(name).copied()
    }

    /// Last value passed to [`Self::set_speed`].
    pub fn speed(&self) -> f64 {
        self.speed
    }

    fn release_value(&self) -> Option<bool> {
        self.values
            .get(&self.gestures.config().release_input)
            .and_then(|v| v.as_bool())
    }

    fn require_selected(&self) -> TesterResult<String> {
        self.selected
            .clone()
            .ok_or_else(|| TesterError::validation("no state machine selected"))
    }

    fn record_drop(&mut self, outcome: Option<DropOutcome>) {
        if let Some(value) = outcome.and_then(|o| o.written) {
            self.values.insert(
                self.gestures.config().release_input.clone(),
                InputValue::Bool(value),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tester/session.rs"]
mod tests;
