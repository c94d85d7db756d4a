//! Error handling for IncubatorHub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Main error type for IncubatorHub
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backend API error: {0}")]
    Api(#[from] ApiError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Field {field} expects {expected}")]
    FieldKind { field: &'static str, expected: &'static str },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Backend API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API request timed out")]
    Timeout,

    #[error("API service unavailable")]
    ServiceUnavailable,

    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type alias for IncubatorHub operations
pub type Result<T> = std::result::Result<T, PortalError>;

impl PortalError {
    /// Check if the error is recoverable by a user retry
    pub fn is_recoverable(&self) -> bool {
        match self {
            PortalError::Config(_) => false,
            PortalError::Api(_) => true,
            PortalError::Http(_) => true,
            PortalError::Serialization(_) => false,
            PortalError::Validation(_) => true,
            PortalError::InvalidStateTransition { .. } => false,
            PortalError::FieldKind { .. } => false,
            PortalError::Authentication(_) => true,
            PortalError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortalError::Config(_) => ErrorSeverity::Critical,
            PortalError::Authentication(_) => ErrorSeverity::Warning,
            PortalError::Validation(_) => ErrorSeverity::Info,
            PortalError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Field errors carried by a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            PortalError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Field-level validation messages keyed by field wire name.
///
/// Ordered so that error listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; the first message for a field wins.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Convert into a `Result`, failing when any message was recorded
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(PortalError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}
