//! Sonify Data Model
//!
//! This crate provides the types shared by every part of the sonification
//! pipeline: instruments and their ADSR envelopes, the note events produced by
//! the data mapper, and the render configuration loaded from JSON.
//!
//! # Example
//!
//! ```
//! use sonify_spec::{preset, NoteEvent, Position};
//! use sonify_spec::validation::validate_note_event;
//!
//! let piano = preset("piano").expect("piano is a built-in preset");
//! assert_eq!(piano.harmonics, vec![1.0, 0.5, 0.2, 0.1]);
//!
//! let note = NoteEvent::new(440.0, 0.0, 1.0).with_position(Position::new(1.0, 2.0, 0.0));
//! assert!(validate_note_event(&note).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types and the `BackendError` reporting trait
//! - [`instrument`]: Instrument and ADSR types plus the preset registry
//! - [`note`]: Note events and 3D positions
//! - [`config`]: Render configuration
//! - [`validation`]: Parameter validation

pub mod config;
pub mod error;
pub mod instrument;
pub mod note;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::{ChannelLayout, ColumnNames, RenderConfig, SonifyMode};
pub use error::{BackendError, SpecError, ValidationError};
pub use instrument::{preset, preset_names, resolve_instrument, Adsr, Instrument};
pub use note::{NoteEvent, Position};
