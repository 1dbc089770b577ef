//! Note rendering and mixing.
//!
//! This module runs every note through synthesis, envelope, optional low-pass
//! and optional spatialization, adds the results into one timeline buffer
//! (mono or stereo), and peak-normalizes the mix.

mod processing;
mod renderer;
mod types;

#[cfg(test)]
mod tests_mixing;
#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_parallel;
#[cfg(test)]
mod tests_stereo_output;
#[cfg(test)]
mod tests_validation;

// Re-export public API
pub use processing::{mix_into, normalize_buffer, normalize_peak, peak};
pub use renderer::{Renderer, Voice};
pub use types::{AudioBuffer, StereoBuffer};
