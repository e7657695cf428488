use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the hypergate library.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of library errors.
///
/// Callers that map errors onto exit codes or transport responses only
/// care whether the gate data itself was bad or the request referenced
/// gates the dataset does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The gate dataset is malformed (bad weight, duplicate code).
    Data,
    /// The request named a gate the dataset does not contain.
    InvalidRequest,
    /// Everything else (I/O, parsing, environment resolution).
    Other,
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the gate dataset contains two gates with the same code.
    #[error("duplicate gate code: {code}")]
    DuplicateGate { code: String },

    /// Raised when a link weight cannot be read as a finite, non-negative
    /// number of hyperspace units.
    #[error("invalid link weight {value:?} on {gate} -> {target}: expected a non-negative number")]
    InvalidLinkWeight {
        gate: String,
        target: String,
        value: String,
    },

    /// Raised when a gate code could not be found in the dataset.
    #[error("unknown gate code: {code}{}", format_suggestions(.suggestions))]
    UnknownGate {
        code: String,
        suggestions: Vec<String>,
    },

    /// Gate dataset could not be located at the resolved path.
    #[error("gate dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the gate dataset")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Classify this error for callers that branch on the broad category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DuplicateGate { .. } | Error::InvalidLinkWeight { .. } => ErrorKind::Data,
            Error::UnknownGate { .. } => ErrorKind::InvalidRequest,
            Error::DatasetNotFound { .. }
            | Error::ProjectDirsUnavailable
            | Error::Io(_)
            | Error::Json(_) => ErrorKind::Other,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
