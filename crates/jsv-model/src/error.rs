use thiserror::Error;

/// Misuse of the formatting or analysis API.
///
/// Every variant is raised before any output is produced; a call either
/// returns a complete string or fails with one of these.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The error list was not a list of records.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The requested format tag is not one of the recognized tags.
    #[error("unsupported format '{tag}': expected one of {valid}")]
    UnsupportedFormat { tag: String, valid: String },

    /// A recognized option for the chosen format has the wrong type or range.
    #[error("invalid option '{option}' for {format} format: expected {expected}")]
    InvalidOption {
        option: String,
        format: String,
        expected: &'static str,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
