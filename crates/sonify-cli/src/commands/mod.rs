//! Command implementations for the sonify CLI.

pub mod json_output;
pub mod presets;
pub mod render;
