/// Convenience result type used across rive-tester.
pub type TesterResult<T> = Result<T, TesterError>;

/// Top-level error taxonomy used by the tester APIs.
#[derive(thiserror::Error, Debug)]
pub enum TesterError {
    /// Invalid user-provided configuration, manifest or command data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The animation engine rejected an operation.
    #[error("engine error: {0}")]
    Engine(String),

    /// The requested state machine or input has not been loaded yet.
    #[error("engine not ready: {0}")]
    EngineNotReady(String),

    /// Errors while replaying a gesture script.
    #[error("script error: {0}")]
    Script(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TesterError {
    /// Build a [`TesterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TesterError::Engine`] value.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Build a [`TesterError::EngineNotReady`] value.
    pub fn not_ready(msg: impl Into<String>) -> Self {
        Self::EngineNotReady(msg.into())
    }

    /// Build a [`TesterError::Script`] value.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Build a [`TesterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error only means "try again once the engine has loaded".
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::EngineNotReady(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
