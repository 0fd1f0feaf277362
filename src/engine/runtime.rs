use crate::engine::input::InputEngine;
use crate::foundation::error::TesterResult;

/// Playback surface used by the testing panel on top of [`InputEngine`].
pub trait PlaybackRuntime: InputEngine {
    /// Linear animation names in the loaded asset.
    fn animation_names(&self) -> Vec<String>;

    /// State machine names in the loaded asset.
    fn state_machine_names(&self) -> Vec<String>;

    /// Play a named animation or state machine, or resume everything with `None`.
    fn play(&mut self, name: Option<&str>) -> TesterResult<()>;

    /// Pause playback.
    fn pause(&mut self);

    /// Rewind the artboard and restore input defaults.
    fn reset(&mut self);

    /// Whether playback is running.
    fn is_playing(&self) -> bool;
}
