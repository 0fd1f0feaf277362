//! rive-tester is a headless harness for exercising Rive state machines by hand.
//!
//! It models the interactive canvas of a Rive preview page without any rendering:
//!
//! 1. **Load**: an [`AssetManifest`] describes what the runtime reports for a `.riv` file
//!    (animations, state machines, typed inputs); [`SimulatedRuntime`] plays it back.
//! 2. **Inspect**: a [`TesterSession`] selects the first state machine, snapshots its inputs and
//!    generates [`InputControl`]s (switches, sliders, trigger buttons).
//! 3. **Gesture**: a [`GestureInputController`] turns vertical drags into a visual offset and a
//!    boolean `MouseRelease` write, then springs the canvas back on an injected [`FrameClock`].
//! 4. **Replay** (optional): a [`GestureScript`] feeds a recorded event sequence through a
//!    session and returns a [`ReplayTrace`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Narrow engine seam**: the gesture controller only sees [`InputEngine`]; playback
//!   commands live on [`PlaybackRuntime`].
//! - **Deterministic transitions**: [`GestureControllerState::apply`] is pure; engine reads and
//!   frame times are carried in the events.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod asset;
mod engine;
mod foundation;
mod gesture;
mod script;
mod tester;

pub use animation::clock::{FrameClock, ManualClock, SystemClock};
pub use animation::ease::Ease;
pub use animation::tween::{Tween, TweenSample};
pub use asset::manifest::{AssetManifest, InputDef, StateMachineDef};
pub use engine::input::{InputDescriptor, InputEngine, InputKind, InputValue};
pub use engine::runtime::PlaybackRuntime;
pub use engine::simulated::{InputWrite, SimulatedRuntime};
pub use foundation::config::{ControllerConfig, TesterOptions, ZoomConfig};
pub use foundation::core::{MouseButton, Point, PointerId, PointerSource, Vec2, vertical_offset};
pub use foundation::error::{TesterError, TesterResult};
pub use gesture::controller::{DropOutcome, GestureInputController};
pub use gesture::state::{Effect, GestureControllerState, GestureEvent, Phase, PointerSession};
pub use gesture::zoom::ZoomLevel;
pub use script::replay::{GestureScript, ReplayTrace, ScriptStep, TraceEntry, replay};
pub use tester::controls::InputControl;
pub use tester::session::{TesterSession, ViewState};
