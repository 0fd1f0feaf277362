use crate::engine::input::{InputDescriptor, InputKind, InputValue};
use crate::foundation::config::TesterOptions;

/// UI control generated for one state-machine input.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum InputControl {
    /// Toggle for a boolean input.
    Switch {
        /// Input name.
        name: String,
        /// Current value.
        checked: bool,
    },
    /// Slider for a number input.
    Slider {
        /// Input name.
        name: String,
        /// Current value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Increment.
        step: f64,
    },
    /// Button firing a trigger input.
    TriggerButton {
        /// Input name.
        name: String,
    },
    /// Plain readout when the value does not fit the declared kind.
    Readout {
        /// Input name.
        name: String,
        /// Kind badge.
        kind: String,
        /// Rendered value.
        value: String,
    },
}

impl InputControl {
    /// Build the control for `input`, preferring the cached value over the engine snapshot.
    pub fn for_input(
        input: &InputDescriptor,
        cached: Option<InputValue>,
        opts: &TesterOptions,
    ) -> Self {
        let name = input.name.clone();
        let current = cached.or(input.value);
        match (input.kind, current) {
            (InputKind::Boolean, Some(InputValue::Bool(checked))) => Self::Switch { name, checked },
            (InputKind::Number, Some(InputValue::Number(value))) => Self::Slider {
                name,
                value,
                min: opts.slider_min,
                max: opts.slider_max,
                step: opts.slider_step,
            },
            (InputKind::Trigger, _) => Self::TriggerButton { name },
            (kind, value) => Self::Readout {
                name,
                kind: kind.label().to_owned(),
                value: value.map_or_else(|| "none".to_owned(), |v| v.to_string()),
            },
        }
    }

    /// Input name the control is bound to.
    pub fn name(&self) -> &str {
        match self {
            Self::Switch { name, .. }
            | Self::Slider { name, .. }
            | Self::TriggerButton { name }
            | Self::Readout { name, .. } => name,
        }
    }
}
