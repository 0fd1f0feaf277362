use crate::asset::manifest::{AssetManifest, StateMachineDef};
use crate::engine::input::{InputDescriptor, InputEngine, InputKind, InputValue};
use crate::engine::runtime::PlaybackRuntime;
use crate::foundation::error::{TesterError, TesterResult};
use std::collections::BTreeMap;

/// A write accepted by the simulated runtime.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InputWrite {
    /// State machine written to.
    pub machine: String,
    /// Input written.
    pub input: String,
    /// Value written.
    pub value: InputValue,
}

#[derive(Clone, Debug)]
struct LoadedInput {
    name: String,
    kind: InputKind,
    value: Option<InputValue>,
}

/// Headless stand-in for the Rive runtime, driven by an [`AssetManifest`].
///
/// A state machine's inputs only exist once it has been played, matching how the real
/// runtime instantiates state machines lazily. Until then input calls report
/// [`TesterError::EngineNotReady`].
#[derive(Clone, Debug)]
pub struct SimulatedRuntime {
    manifest: AssetManifest,
    loaded: BTreeMap<String, Vec<LoadedInput>>,
    active: Option<String>,
    playing: bool,
    writes: Vec<InputWrite>,
    fired: Vec<(String, String)>,
}

impl SimulatedRuntime {
    /// Runtime for `manifest` with nothing loaded or playing.
    pub fn new(manifest: AssetManifest) -> Self {
        Self {
            manifest,
            loaded: BTreeMap::new(),
            active: None,
            playing: false,
            writes: Vec::new(),
            fired: Vec::new(),
        }
    }

    /// The manifest this runtime was built from.
    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    /// Name of the animation or state machine last passed to `play`.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether `machine` has been instantiated.
    pub fn is_loaded(&self, machine: &str) -> bool {
        self.loaded.contains_key(machine)
    }

    /// Every accepted input write, oldest first.
    pub fn writes(&self) -> &[InputWrite] {
        &self.writes
    }

    /// Every fired trigger as `(machine, input)`, oldest first.
    pub fn fired(&self) -> &[(String, String)] {
        &self.fired
    }

    fn instantiate(def: &StateMachineDef) -> Vec<LoadedInput> {
        def.inputs
            .iter()
            .map(|i| LoadedInput {
                name: i.name.clone(),
                kind: i.kind,
                value: i.initial_value(),
            })
            .collect()
    }

    fn machine(&self, machine: &str) -> TesterResult<&[LoadedInput]> {
        self.loaded
            .get(machine)
            .map(Vec::as_slice)
            .ok_or_else(|| TesterError::not_ready(format!("state machine '{machine}' not loaded")))
    }

    fn input_mut(&mut self, machine: &str, input: &str) -> TesterResult<&mut LoadedInput> {
        let inputs = self.loaded.get_mut(machine).ok_or_else(|| {
            TesterError::not_ready(format!("state machine '{machine}' not loaded"))
        })?;
        inputs
            .iter_mut()
            .find(|i| i.name == input)
            .ok_or_else(|| TesterError::engine(format!("'{machine}' has no input '{input}'")))
    }
}

impl InputEngine for SimulatedRuntime {
    fn list_inputs(&self, machine: &str) -> TesterResult<Vec<InputDescriptor>> {
        Ok(self
            .machine(machine)?
            .iter()
            .map(|i| InputDescriptor {
                name: i.name.clone(),
                kind: i.kind,
                value: i.value,
            })
            .collect())
    }

    fn input_value(&self, machine: &str, input: &str) -> TesterResult<InputValue> {
        let found = self
            .machine(machine)?
            .iter()
            .find(|i| i.name == input)
            .ok_or_else(|| TesterError::engine(format!("'{machine}' has no input '{input}'")))?;
        found
            .value
            .ok_or_else(|| TesterError::engine(format!("trigger '{input}' has no value")))
    }

    fn set_input_value(
        &mut self,
        machine: &str,
        input: &str,
        value: InputValue,
    ) -> TesterResult<()> {
        let slot = self.input_mut(machine, input)?;
        if slot.kind != value.kind() {
            return Err(TesterError::validation(format!(
                "input '{input}' is {} but got {value}",
                slot.kind.label()
            )));
        }
        slot.value = Some(value);
        self.writes.push(InputWrite {
            machine: machine.to_owned(),
            input: input.to_owned(),
            value,
        });
        Ok(())
    }

    fn fire_trigger(&mut self, machine: &str, input: &str) -> TesterResult<()> {
        let slot = self.input_mut(machine, input)?;
        if slot.kind != InputKind::Trigger {
            return Err(TesterError::validation(format!(
                "input '{input}' is {}, not a trigger",
                slot.kind.label()
            )));
        }
        self.fired.push((machine.to_owned(), input.to_owned()));
        Ok(())
    }
}

impl PlaybackRuntime for SimulatedRuntime {
    fn animation_names(&self) -> Vec<String> {
        self.manifest.animations.clone()
    }

    fn state_machine_names(&self) -> Vec<String> {
        self.manifest
            .state_machines
            .iter()
            .map(|sm| sm.name.clone())
            .collect()
    }

    fn play(&mut self, name: Option<&str>) -> TesterResult<()> {
        let Some(name) = name else {
            self.playing = true;
            return Ok(());
        };
        if let Some(def) = self.manifest.state_machine(name) {
            if !self.loaded.contains_key(name) {
                let inputs = Self::instantiate(def);
                self.loaded.insert(name.to_owned(), inputs);
            }
        } else if !self.manifest.animations.iter().any(|a| a == name) {
            return Err(TesterError::engine(format!(
                "no animation or state machine named '{name}'"
            )));
        }
        self.active = Some(name.to_owned());
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn reset(&mut self) {
        for (name, inputs) in self.loaded.iter_mut() {
            if let Some(def) = self.manifest.state_machine(name) {
                *inputs = Self::instantiate(def);
            }
        }
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/simulated.rs"]
mod tests;
