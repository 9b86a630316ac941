// ABOUTME: Structured logging setup built on tracing-subscriber
// ABOUTME: Installs a global subscriber writing pretty, compact, or JSON lines to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

//! Logging initialization.
//!
//! Output always goes to stderr so stdout carries only rendered results.
//! `RUST_LOG` takes precedence over the configured level when set.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::{AppError, AppResult};

/// Build the filter from `RUST_LOG`, falling back to the configured directive
///
/// # Errors
///
/// Returns a `ConfigError` when the configured directive does not parse.
pub fn build_filter(config: &LoggingConfig) -> AppResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| AppError::config(format!("Invalid log filter '{}': {e}", config.level)))
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns a `ConfigError` for an invalid filter directive, or an
/// `InternalError` if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(io::stderr))
            .try_init(),
    };

    installed.map_err(|e| AppError::internal(format!("Failed to install log subscriber: {e}")))
}
