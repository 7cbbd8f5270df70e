//! Error types for the DC-DC converter designer.
//!
//! This module provides a unified error type [`DesignerError`] that covers
//! all error conditions that can occur during input parsing, spec
//! validation, component sizing, and design file I/O.

use thiserror::Error;

/// Result type alias using [`DesignerError`].
pub type Result<T> = std::result::Result<T, DesignerError>;

/// Unified error type for all designer operations.
#[derive(Error, Debug)]
pub enum DesignerError {
    // ============ Input Errors ============
    /// A textual quantity could not be parsed
    #[error("Invalid value '{input}': {message}")]
    InvalidValue { input: String, message: String },

    /// Unknown converter topology name
    #[error("Unknown converter type '{name}' (expected Buck, Boost or Buck-Boost)")]
    UnknownTopology { name: String },

    /// Unknown waveform channel name
    #[error("Unknown waveform channel '{name}'")]
    UnknownChannel { name: String },

    /// Unknown display mode name
    #[error("Unknown display mode '{name}' (expected all, duty, current or voltage)")]
    UnknownDisplayMode { name: String },

    // ============ Design Errors ============
    /// The operating parameters violate a converter invariant
    #[error("Invalid converter spec: {reason}")]
    InvalidSpec { reason: String },

    /// A derived quantity left its physically meaningful range
    #[error("Degenerate design: {quantity} evaluated to {value:.4e}")]
    ArithmeticDegeneracy { quantity: String, value: f64 },

    /// Invalid waveform synthesis parameter
    #[error("Invalid synthesis parameter: {message}")]
    InvalidSynthesisParam { message: String },

    // ============ Persistence Errors ============
    /// A design record lacks a required parameter
    #[error("Design record is missing parameter '{name}'")]
    MissingParameter { name: String },

    /// JSON encoding or decoding failed
    #[error("Design serialization error: {message}")]
    Serialization { message: String },

    /// Error reading a design file
    #[error("Failed to read design file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a design file or export
    #[error("Failed to write '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing report or waveform output
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl DesignerError {
    /// Create an invalid spec error
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Create an arithmetic degeneracy error
    pub fn degenerate(quantity: impl Into<String>, value: f64) -> Self {
        Self::ArithmeticDegeneracy {
            quantity: quantity.into(),
            value,
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            input: input.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DesignerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
