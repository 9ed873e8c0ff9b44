//! Errors raised while exporting track statistics
//!
//! Collaborator failures (`SessionError`, `SinkError`) are plain enums. They
//! surface at the action boundary as a structured `ExportError` carrying a
//! machine-readable code.

use crate::{SpotId, TrackId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const SESSION_ERROR: &str = "SESSION_ERROR";
    pub const SINK_ERROR: &str = "SINK_ERROR";
    pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
    pub const SOURCE_LOCATION: &str = "SOURCE_LOCATION";
    pub const UNKNOWN_ACTION: &str = "UNKNOWN_ACTION";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Failure reported by the tracking session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("No type metadata for feature {0}")]
    MissingFeatureMetadata(String),

    #[error("Unknown track: {0}")]
    UnknownTrack(TrackId),

    #[error("Spot {0} has no frame")]
    MissingFrame(SpotId),

    #[error("Corrupt tracking model: {0}")]
    Model(String),
}

/// Failure reported by a table sink
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding failed: {0}")]
    Encode(String),

    #[error("Table rejected: {0}")]
    Rejected(String),
}

/// Structured export error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Session failure this error wraps, if any
    #[serde(skip)]
    pub session: Option<SessionError>,
}

impl ExportError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            session: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_session_error(&self) -> bool {
        self.code == codes::SESSION_ERROR
    }

    // ========== Common Error Constructors ==========

    pub fn schema_mismatch(details: impl Into<String>) -> Self {
        Self::new(codes::SCHEMA_MISMATCH, format!("Schema mismatch: {}", details.into()))
    }

    pub fn source_location(details: impl Into<String>) -> Self {
        Self::new(codes::SOURCE_LOCATION, format!("Cannot resolve source location: {}", details.into()))
            .with_suggestion("Check the image folder and file name of the session")
    }

    pub fn unknown_action(key: &str) -> Self {
        Self::new(codes::UNKNOWN_ACTION, format!("Unknown action: {}", key))
            .with_suggestion("Use list_actions() to see registered actions")
    }

    pub fn config(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIG_ERROR, format!("Invalid configuration: {}", details.into()))
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.session.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<SessionError> for ExportError {
    fn from(err: SessionError) -> Self {
        let mut out = Self::new(codes::SESSION_ERROR, err.to_string());
        out.session = Some(err);
        out
    }
}

impl From<SinkError> for ExportError {
    fn from(err: SinkError) -> Self {
        Self::new(codes::SINK_ERROR, err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}
