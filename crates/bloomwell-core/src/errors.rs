// ABOUTME: Unified error type shared by the Bloomwell library and CLI
// ABOUTME: ErrorCode taxonomy plus AppError with convenience constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

//! # Error Handling
//!
//! Every fallible operation in Bloomwell returns [`AppResult`]. Errors carry a
//! stable [`ErrorCode`] so callers can branch on the kind without matching
//! on message text.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error categories
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Input was well-formed but semantically rejected
    InvalidInput,
    /// Input could not be parsed
    InvalidFormat,
    /// A required field was absent
    MissingRequiredField,
    /// Configuration value missing or malformed
    ConfigError,
    /// Serialization or deserialization failed
    SerializationError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Machine-readable name of the code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::InvalidFormat => "invalid_format",
            Self::MissingRequiredField => "missing_required_field",
            Self::ConfigError => "config_error",
            Self::SerializationError => "serialization_error",
            Self::InternalError => "internal_error",
        }
    }

    /// Human-readable description of the error category
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::InvalidFormat => "Invalid format",
            Self::MissingRequiredField => "Missing required field",
            Self::ConfigError => "Configuration error",
            Self::SerializationError => "Serialization error",
            Self::InternalError => "Internal error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application error with a stable code and a contextual message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error category
    pub code: ErrorCode,
    /// Context for the failure
    pub message: String,
}

impl AppError {
    /// Create an error with an explicit code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Input was rejected
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Input could not be parsed
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Required field missing
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field '{field}'"),
        )
    }

    /// Configuration problem
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Serialization problem
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::serialization(e.to_string())
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;
