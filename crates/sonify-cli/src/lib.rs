//! Sonify CLI library.
//!
//! Data loading and the command implementations behind the `sonify` binary.

pub mod commands;
pub mod input;
