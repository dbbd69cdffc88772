//! Error types for TSPL command encoding.
//!
//! Rendering a command can only fail validation. Writing a rendered label to a
//! sink can additionally fail with an I/O error.

use thiserror::Error;

/// Main error type for label operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A command in the label failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The sink rejected the rendered bytes.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A command could not be rendered because a field is missing or invalid.
///
/// Every variant carries the command name as it appears on the wire and the
/// name of the offending field, so the message can be shown to a user as is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{command} command: {field} should be specified")]
    MissingField {
        command: &'static str,
        field: &'static str,
    },

    #[error("{command} command: {field} must not be empty")]
    EmptyField {
        command: &'static str,
        field: &'static str,
    },

    /// Numeric field outside of its inclusive range.
    #[error("{command} command: {field} must be between {min} and {max}")]
    OutOfRange {
        command: &'static str,
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// Integer field below its minimum.
    #[error("{command} command: {field} must be at least {min}")]
    BelowMinimum {
        command: &'static str,
        field: &'static str,
        min: i32,
    },

    #[error("{command} command: {field} must be a finite number not below 0")]
    Negative {
        command: &'static str,
        field: &'static str,
    },

    #[error("{command} command: {field} must be a finite number greater than 0")]
    NotPositive {
        command: &'static str,
        field: &'static str,
    },

    /// Integer field that is not one of a fixed set of values.
    #[error("{command} command: {field} must be one of [{}], got {value}", join(.allowed))]
    NotAllowed {
        command: &'static str,
        field: &'static str,
        value: i32,
        allowed: &'static [i32],
    },
}

impl ValidationError {
    /// Wire name of the command that failed.
    pub fn command(&self) -> &'static str {
        match self {
            Self::MissingField { command, .. }
            | Self::EmptyField { command, .. }
            | Self::OutOfRange { command, .. }
            | Self::BelowMinimum { command, .. }
            | Self::Negative { command, .. }
            | Self::NotPositive { command, .. }
            | Self::NotAllowed { command, .. } => command,
        }
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. }
            | Self::EmptyField { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::Negative { field, .. }
            | Self::NotPositive { field, .. }
            | Self::NotAllowed { field, .. } => field,
        }
    }
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
