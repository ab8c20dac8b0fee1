//! Error types for the editor core and the session registry.
//!
//! DESIGN
//! ======
//! The reducer and the façade's edit operations are total and never fail.
//! Errors only arise from opt-in checks: layout validation, strict-mode key
//! checks on `add_field`, JSON interchange, configuration parsing, and
//! session lookup. Every variant carries a grepable code via [`ErrorCode`].

use crate::sessions::SessionId;

/// Grepable, stable error codes for host-facing error payloads.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("field key must not be empty")]
    EmptyKey,
    #[error("duplicate field key: {0}")]
    DuplicateKey(String),
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("invalid font size {size} on field {key}")]
    InvalidFontSize { key: String, size: f64 },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
}

impl ErrorCode for EditorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyKey => "E_EMPTY_KEY",
            Self::DuplicateKey(_) => "E_DUPLICATE_KEY",
            Self::InvalidDimensions { .. } => "E_INVALID_DIMENSIONS",
            Self::InvalidFontSize { .. } => "E_INVALID_FONT_SIZE",
            Self::Json(_) => "E_JSON",
            Self::Config(_) => "E_CONFIG",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("editor session not found: {0}")]
    NotFound(SessionId),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

impl ErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_SESSION_NOT_FOUND",
            Self::Editor(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
