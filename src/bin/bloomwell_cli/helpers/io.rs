// ABOUTME: Input and output plumbing for bloomwell-cli
// ABOUTME: Reads JSON from a file or stdin and prints formatted results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use bloomwell::errors::{AppError, AppResult};
use bloomwell::formatters::{format_output, format_output_pretty, OutputFormat};
use serde::Serialize;
use tracing::debug;

/// How results are printed
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Serialization format
    pub format: OutputFormat,
    /// Multi-line JSON
    pub pretty: bool,
}

/// Read a file, or stdin when the path is absent or `-`
pub fn read_input(path: Option<&Path>) -> AppResult<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "Reading input file");
            fs::read_to_string(path).map_err(|e| {
                AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
            })
        }
        _ => {
            debug!("Reading input from stdin");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| AppError::invalid_input(format!("Cannot read stdin: {e}")))?;
            Ok(buffer)
        }
    }
}

/// Format a result and write it to stdout
pub fn emit<T: Serialize>(value: &T, options: RenderOptions) -> AppResult<()> {
    let output = if options.pretty {
        format_output_pretty(value, options.format)?
    } else {
        format_output(value, options.format)?
    };
    println!("{}", output.data);
    Ok(())
}
