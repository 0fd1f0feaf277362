pub(crate) mod controls;
pub(crate) mod session;
