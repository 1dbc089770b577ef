//! Sonify Audio Core
//!
//! This crate turns numeric data into audio. Data points become note events,
//! and each note is rendered through a fixed chain:
//!
//! - **Synthesis** - weighted harmonic partials with optional vibrato
//! - **Envelope** - linear ADSR shaping
//! - **Filter** - one-pole low-pass, when the note carries a cutoff
//! - **Spatialization** - distance attenuation and constant-power panning
//!
//! Voices are added into one mono or stereo timeline buffer, which is then
//! normalized to unit peak across all channels.
//!
//! # Determinism
//!
//! Rendering has no random state. The same notes, instrument and sample rate
//! always produce the same buffer, and parallel rendering mixes voices in
//! input order so it matches the sequential path bit for bit.
//!
//! # Example
//!
//! ```
//! use sonify_audio::{sonify, wav::WavResult, DataSource};
//! use sonify_spec::RenderConfig;
//!
//! let config = RenderConfig {
//!     sample_rate: 8000,
//!     duration: 1.0,
//!     ..RenderConfig::default()
//! };
//! let buffer = sonify(&DataSource::Series(vec![1.0, 4.0, 2.0, 8.0]), &config).unwrap();
//! assert_eq!(buffer.len(), 16000);
//!
//! let wav = WavResult::from_buffer(&buffer, config.sample_rate).unwrap();
//! assert!(wav.is_stereo());
//! ```
//!
//! # Crate Structure
//!
//! - [`render`] - note renderer, mixing and normalization
//! - [`sonification`] - data extraction, scaling and note mapping
//! - [`synthesis`] - additive harmonic synthesis
//! - [`envelope`] - ADSR envelope
//! - [`filter`] - one-pole low-pass
//! - [`spatial`] - stereo gains from 3D positions
//! - [`wav`] - PCM16 WAV export

pub mod envelope;
pub mod error;
pub mod filter;
pub mod render;
pub mod sonification;
pub mod spatial;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use render::{AudioBuffer, Renderer, StereoBuffer};
pub use sonification::{sonify, DataSource, Table};
pub use synthesis::sample_count;
pub use wav::{write_wav_file, WavResult};
