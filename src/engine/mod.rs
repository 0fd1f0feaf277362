pub(crate) mod input;
pub(crate) mod runtime;
pub(crate) mod simulated;
