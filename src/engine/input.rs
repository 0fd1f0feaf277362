use crate::foundation::error::TesterResult;

/// Type of a state-machine input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// On/off input.
    Boolean,
    /// Numeric input.
    Number,
    /// Fire-only input with no value.
    Trigger,
}

impl InputKind {
    /// Badge label shown next to generated controls.
    pub fn label(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::Trigger => "Trigger",
        }
    }
}

/// Value held by a boolean or number input.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    /// Boolean input value.
    Bool(bool),
    /// Number input value.
    Number(f64),
}

impl InputValue {
    /// Kind of input that can hold this value.
    pub fn kind(self) -> InputKind {
        match self {
            Self::Bool(_) => InputKind::Boolean,
            Self::Number(_) => InputKind::Number,
        }
    }

    /// The boolean, if this is a boolean value.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            Self::Number(_) => None,
        }
    }
}

impl std::fmt::Display for InputValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One entry of `list_inputs`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputDescriptor {
    /// Input name.
    pub name: String,
    /// Input type.
    pub kind: InputKind,
    /// Current value; `None` for triggers.
    pub value: Option<InputValue>,
}

/// The only surface of the animation engine the gesture controller may touch.
///
/// Every call may fail with [`crate::TesterError::EngineNotReady`] while the
/// state machine is still loading. Callers decide whether that is an error.
pub trait InputEngine {
    /// Inputs exposed by `machine`, in declaration order.
    fn list_inputs(&self, machine: &str) -> TesterResult<Vec<InputDescriptor>>;

    /// Current value of a boolean or number input.
    fn input_value(&self, machine: &str, input: &str) -> TesterResult<InputValue>;

    /// Write a boolean or number input.
    fn set_input_value(&mut self, machine: &str, input: &str, value: InputValue)
    -> TesterResult<()>;

    /// Fire a trigger input.
    fn fire_trigger(&mut self, machine: &str, input: &str) -> TesterResult<()>;
}
