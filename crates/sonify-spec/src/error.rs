//! Error types for the data model and the shared reporting trait.

use thiserror::Error;

/// Trait for errors that can be reported with a stable code.
///
/// Every crate in the workspace implements this for its error type so that the
/// CLI can emit machine-readable diagnostics without knowing the concrete type.
///
/// # Example
///
/// ```
/// use sonify_spec::error::BackendError;
///
/// fn report<E: BackendError>(err: &E) -> String {
///     format!("[{}] {}", err.code(), err.message())
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting (e.g. "SPEC_001", "AUDIO_003").
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

/// A single invalid field, reported on the first failure.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. "adsr.sustain").
    pub field: String,
    /// Description of the problem.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefixes the field path, e.g. `adsr` + `sustain` -> `adsr.sustain`.
    pub fn within(mut self, parent: &str) -> Self {
        self.field = format!("{}.{}", parent, self.field);
        self
    }
}

/// Errors raised while loading or resolving data model values.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON could not be parsed into the expected type.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown instrument preset name.
    #[error("unknown instrument '{name}' (expected one of: {available})")]
    UnknownInstrument {
        /// Requested name.
        name: String,
        /// Comma separated list of known presets.
        available: String,
    },

    /// A value failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl BackendError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::Json(_) => "SPEC_001",
            SpecError::UnknownInstrument { .. } => "SPEC_002",
            SpecError::Invalid(_) => "SPEC_003",
        }
    }

    fn category(&self) -> &'static str {
        "spec"
    }
}
