//! Error types for header generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The template file could not be read
    #[error("failed to read template {}: {source}", .path.display())]
    MissingTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sentinel marker is absent from the template
    #[error("template is missing sentinel marker: {marker}")]
    MalformedTemplate { marker: &'static str },

    /// A sentinel marker occurs more than once in the template
    #[error("sentinel marker {marker} occurs {count} times, expected exactly once")]
    DuplicateMarker { marker: &'static str, count: usize },

    /// The header rewrite pattern is not a valid regular expression
    #[error("invalid header pattern '{pattern}': {source}")]
    InvalidHeaderPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl GeneratorError {
    /// Returns true for errors caused by the shape of the template text
    pub fn is_template_shape(&self) -> bool {
        matches!(
            self,
            GeneratorError::MalformedTemplate { .. } | GeneratorError::DuplicateMarker { .. }
        )
    }
}
