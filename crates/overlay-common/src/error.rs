//! Error types for the overlay pipeline.

use thiserror::Error;

/// Result type alias using OverlayError.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Primary error type for overlay generation.
#[derive(Debug, Error)]
pub enum OverlayError {
    // === Input Errors ===
    #[error("Malformed input line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Input contained no data records")]
    EmptyInput,

    // === Decode Errors ===
    #[error("Invalid grid reference {reference:?}: {message}")]
    InvalidGridRef { reference: String, message: String },

    // === Gradient Errors ===
    #[error("Gradient size must be at least 1, got {0}")]
    InvalidGradientSteps(i64),

    #[error("Density {density} has no style in the {steps}-step gradient")]
    StyleIndexOutOfRange { density: i64, steps: usize },

    #[error("Invalid color {0:?}: expected a color name or #RRGGBB")]
    InvalidColor(String),

    // === Output Errors ===
    #[error("Failed to serialize scene document: {0}")]
    Serialize(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OverlayError {
    /// Build an `InvalidGridRef` without the call-site boilerplate.
    pub fn invalid_grid_ref(reference: impl Into<String>, message: impl Into<String>) -> Self {
        OverlayError::InvalidGridRef {
            reference: reference.into(),
            message: message.into(),
        }
    }
}
