//! Small helpers shared by the hooks

pub mod format;
pub mod glob;
