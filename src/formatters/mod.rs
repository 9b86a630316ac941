// ABOUTME: Output format abstraction for rendering plans, sessions, and ledgers
// ABOUTME: Supports JSON (default) and TOON (token-efficient for LLM consumption)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

//! Output Format Abstraction Layer
//!
//! Every result type in Bloomwell is `Serialize`; this module turns one into
//! text. JSON is the default. TOON (Token-Oriented Object Notation) is
//! available behind the `toon` feature for callers that hand plans to an LLM
//! assistant; without the feature a TOON request falls back to JSON.
//!
//! ```rust
//! use bloomwell::formatters::{format_output, OutputFormat};
//!
//! let steps = vec!["warm-up", "breathing"];
//! let output = format_output(&steps, OutputFormat::Json).unwrap();
//! assert_eq!(output.data, r#"["warm-up","breathing"]"#);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "toon")]
use toon_format::EncodeOptions;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// TOON format - Token-Oriented Object Notation
    Toon,
}

impl OutputFormat {
    /// Parse format from a request parameter (case-insensitive).
    /// Returns `Json` for unrecognized values.
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        Self::parse_strict(s).unwrap_or_default()
    }

    /// Parse format, returning `None` for unrecognized values
    #[must_use]
    pub fn parse_strict(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toon" => Some(Self::Toon),
            _ => None,
        }
    }

    /// MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            // TOON doesn't have an official MIME type yet, use vendor prefix
            Self::Toon => "application/vnd.toon",
        }
    }

    /// Format name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized data plus the format that produced it
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized text
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// MIME content type
    pub content_type: &'static str,
}

impl FormattedOutput {
    /// Estimated LLM token count (4 characters per token, rounded up)
    #[must_use]
    pub fn estimated_tokens(&self) -> usize {
        self.data.chars().count().div_ceil(4)
    }
}

/// Serialize data in the requested format
///
/// # Errors
///
/// Returns `SerializationError` if the value cannot be encoded.
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> AppResult<FormattedOutput> {
    render(data, format, false)
}

/// Serialize data in the requested format with human-friendly layout.
/// TOON output is already line-oriented and is unaffected.
///
/// # Errors
///
/// Returns `SerializationError` if the value cannot be encoded.
pub fn format_output_pretty<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> AppResult<FormattedOutput> {
    render(data, format, true)
}

fn render<T: Serialize>(data: &T, format: OutputFormat, pretty: bool) -> AppResult<FormattedOutput> {
    let data = match (format, pretty) {
        (OutputFormat::Json, false) => serde_json::to_string(data)?,
        (OutputFormat::Json, true) => serde_json::to_string_pretty(data)?,
        (OutputFormat::Toon, _) => encode_toon(data)?,
    };

    let output = FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    };
    debug!(
        format = %output.format,
        byte_size = output.data.len(),
        estimated_tokens = output.estimated_tokens(),
        "Formatted output"
    );
    Ok(output)
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> AppResult<String> {
    let value = serde_json::to_value(data)?;
    let options = EncodeOptions::default();
    toon_format::encode(&value, &options)
        .map_err(|e| AppError::serialization(format!("TOON encoding failed: {e}")))
}

/// Fallback: TOON feature disabled, serialize as JSON instead
#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(data: &T) -> AppResult<String> {
    debug!("TOON format requested but toon feature is disabled, falling back to JSON");
    serde_json::to_string(data)
        .map_err(|e| AppError::serialization(format!("JSON fallback failed: {e}")))
}
