use crate::engine::input::{InputKind, InputValue};
use crate::foundation::config::{open_json, read_json};
use crate::foundation::error::{TesterError, TesterResult};
use std::collections::BTreeSet;
use std::path::Path;

/// Declared input of a state machine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDef {
    /// Input name.
    pub name: String,
    /// Input type.
    pub kind: InputKind,
    /// Initial value; `false`/`0` when omitted. Must be absent for triggers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<InputValue>,
}

impl InputDef {
    /// Initial value, or `None` for triggers.
    pub fn initial_value(&self) -> Option<InputValue> {
        match self.kind {
            InputKind::Boolean => Some(self.default.unwrap_or(InputValue::Bool(false))),
            InputKind::Number => Some(self.default.unwrap_or(InputValue::Number(0.0))),
            InputKind::Trigger => None,
        }
    }
}

/// Declared state machine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateMachineDef {
    /// State machine name.
    pub name: String,
    /// Inputs in declaration order.
    #[serde(default)]
    pub inputs: Vec<InputDef>,
}

/// Description of a loaded `.riv` asset: what the runtime would report after parsing it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetManifest {
    /// Display name (usually the uploaded file name).
    pub name: String,
    /// Linear animation names.
    #[serde(default)]
    pub animations: Vec<String>,
    /// State machines, first one is the default.
    #[serde(default)]
    pub state_machines: Vec<StateMachineDef>,
}

impl AssetManifest {
    /// Parse and validate a manifest from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TesterResult<Self> {
        let manifest: Self = read_json(r, "asset manifest")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse and validate a manifest from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TesterResult<Self> {
        Self::from_reader(open_json(path.as_ref(), "asset manifest")?)
    }

    /// Look up a state machine by name.
    pub fn state_machine(&self, name: &str) -> Option<&StateMachineDef> {
        self.state_machines.iter().find(|sm| sm.name == name)
    }

    /// Reject duplicate names and defaults that do not fit their input kind.
    pub fn validate(&self) -> TesterResult<()> {
        let mut seen = BTreeSet::new();
        for anim in &self.animations {
            if anim.is_empty() {
                return Err(TesterError::validation("animation name must not be empty"));
            }
            if !seen.insert(anim.as_str()) {
                return Err(TesterError::validation(format!(
                    "duplicate animation name '{anim}'"
                )));
            }
        }

        let mut machines = BTreeSet::new();
        for sm in &self.state_machines {
            if sm.name.is_empty() {
                return Err(TesterError::validation(
                    "state machine name must not be empty",
                ));
            }
            if !machines.insert(sm.name.as_str()) {
                return Err(TesterError::validation(format!(
                    "duplicate state machine name '{}'",
                    sm.name
                )));
            }
            let mut inputs = BTreeSet::new();
            for input in &sm.inputs {
                if !inputs.insert(input.name.as_str()) {
                    return Err(TesterError::validation(format!(
                        "state machine '{}': duplicate input '{}'",
                        sm.name, input.name
                    )));
                }
                validate_default(&sm.name, input)?;
            }
        }
        Ok(())
    }
}

fn validate_default(machine: &str, input: &InputDef) -> TesterResult<()> {
    if input.name.is_empty() {
        return Err(TesterError::validation(format!(
            "state machine '{machine}': input name must not be empty"
        )));
    }
    match (input.kind, input.default) {
        (_, None) => Ok(()),
        (InputKind::Trigger, Some(v)) => Err(TesterError::validation(format!(
            "state machine '{machine}': trigger '{}' cannot have a default (got {v})",
            input.name
        ))),
        (InputKind::Number, Some(InputValue::Number(n))) if !n.is_finite() => {
            Err(TesterError::validation(format!(
                "state machine '{machine}': number input '{}' default must be finite",
                input.name
            )))
        }
        (kind, Some(v)) if v.kind() != kind => Err(TesterError::validation(format!(
            "state machine '{machine}': input '{}' is {} but default is {v}",
            input.name,
            kind.label()
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/asset/manifest.rs"]
mod tests;
