//! View helpers

pub mod constants;
pub mod format;
