//! CLI command implementations.

pub(crate) mod nav;
pub(crate) mod rebuild;

pub(crate) use nav::NavArgs;
pub(crate) use rebuild::RebuildArgs;
