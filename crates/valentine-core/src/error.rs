//! Core error types for valentine-core.
//!
//! Two families live here. Transition and resource errors describe things the
//! card shrugs off: an impossible click, a cue that could not play. They are
//! surfaced on the checked APIs and swallowed everywhere else. Config and
//! validation errors belong to the ambient layers and do propagate.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for valentine-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A user action that is not permitted in the current state.
///
/// Never fatal: the plain `decline()`/`accept()` APIs turn these into no-ops.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// The proposal was already accepted; the session is terminal.
    #[error("proposal already accepted")]
    AlreadyAccepted,

    /// The negative option has been withdrawn after too many declines.
    #[error("decline is no longer available after {limit} declines")]
    DeclineUnavailable { limit: u32 },
}

/// An external collaborator (cue player, asset source) that could not serve.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("{resource} unavailable: {reason}")]
    Unavailable { resource: String, reason: String },
}

impl ResourceError {
    pub fn unavailable(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        ResourceError::Unavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dotted key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Could not locate the configuration directory
    #[error("Cannot determine configuration directory: {0}")]
    NoDataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Growth slope must be a positive finite number
    #[error("Invalid growth slope {0}: must be finite and greater than zero")]
    InvalidSlope(f64),

    /// Growth cap must be at least the resting scale
    #[error("Invalid scale cap {0}: must be finite and at least 1.0")]
    InvalidCap(f64),

    /// Month/day pair that never occurs on a calendar
    #[error("Invalid calendar date: month {month}, day {day}")]
    InvalidDate { month: u32, day: u32 },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
