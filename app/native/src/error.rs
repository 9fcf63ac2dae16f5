//! Error types for Token Animation.
//!
//! This module provides the error types used throughout the crate. Policy
//! errors are configuration problems reported by the host integration (a
//! non-positive grid scale, a missing movement context); they are always
//! surfaced to the caller and never swallowed by the decision engine itself.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for policy operations.
pub type AnimationResult<T> = Result<T, AnimationError>;

/// Errors that can occur while evaluating the animation policy.
///
/// Every variant is a configuration error: the inputs handed over by the
/// host are unusable. A missing or mistyped setting is *not* an error, the
/// settings view reports it as unavailable and the default is used instead.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum AnimationError {
    /// The grid size was zero, negative, or not a finite number.
    #[error("Invalid grid size: {0} (must be a positive finite number)")]
    InvalidGridSize(f64),

    /// The host's default speed was zero, negative, or not a finite number.
    #[error("Invalid default speed: {0} (must be a positive finite number)")]
    InvalidDefaultSpeed(f64),

    /// The caller did not provide the movement being animated.
    #[error("Missing movement context: {0}")]
    MissingContext(String),

    /// An entity referenced by an update could not be found.
    #[error("Entity '{0}' not found")]
    EntityNotFound(String),
}

impl AnimationError {
    /// Creates a missing context error with the given description.
    #[must_use]
    pub fn missing_context(what: impl Into<String>) -> Self { Self::MissingContext(what.into()) }

    /// Creates an entity not found error for the given identifier.
    #[must_use]
    pub fn entity_not_found(id: impl Into<String>) -> Self { Self::EntityNotFound(id.into()) }

    /// Returns `true` if this error was caused by a bad grid scale.
    #[must_use]
    pub const fn is_grid_error(&self) -> bool { matches!(self, Self::InvalidGridSize(_)) }

    /// Returns `true` if a required reference was absent.
    #[must_use]
    pub const fn is_missing_reference(&self) -> bool {
        matches!(self, Self::MissingContext(_) | Self::EntityNotFound(_))
    }
}

/// Errors surfaced by the command-line interface.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum CliError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Policy evaluation failed.
    #[error("Policy error: {0}")]
    PolicyError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<AnimationError> for CliError {
    fn from(err: AnimationError) -> Self { Self::PolicyError(err.to_string()) }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self { Self::InvalidArguments(err.to_string()) }
}
