//! Error types for session and export operations
//!
//! The event log and the metrics engine never fail; every error here comes
//! from validating input at the tagging boundary or from writing exports.

use thiserror::Error;

/// Result type for tagger operations
pub type TaggerResult<T> = Result<T, TaggerError>;

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("Play label must not be empty")]
    EmptyPlay,

    #[error("Play '{0}' is already in the playbook")]
    DuplicatePlay(String),

    #[error("Play '{0}' is not in the playbook")]
    UnknownPlay(String),

    #[error("Player name must not be empty")]
    EmptyPlayerName,

    #[error("Player '{0}' is already on the roster")]
    DuplicatePlayer(String),

    #[error("Player '{0}' is not on the roster")]
    UnknownPlayer(String),

    #[error("Opponent must not be empty")]
    EmptyOpponent,

    #[error("Invalid quarter '{0}', expected one of 1, 2, 3, 4, OT")]
    InvalidQuarter(String),

    #[error("Invalid result '{0}', expected one of Made 2, Made 3, Missed 2, Missed 3, Foul")]
    InvalidResult(String),

    #[error("Invalid timestamp '{0}', expected RFC 3339")]
    InvalidTimestamp(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Notes exceed {max} characters")]
    NotesTooLong { max: usize },

    #[error("Cannot start tagging, missing: {}", .0.join(", "))]
    NotReady(Vec<String>),

    #[error("Tagging has not been started for this session")]
    NotStarted,

    #[error("No play selected")]
    NoPlaySelected,

    #[error("Session '{0}' not found")]
    SessionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl TaggerError {
    /// Whether the error was caused by caller input rather than the environment
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            TaggerError::Io(_) | TaggerError::Json(_) | TaggerError::Csv(_)
        )
    }
}
