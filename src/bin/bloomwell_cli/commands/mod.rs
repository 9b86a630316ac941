// ABOUTME: Subcommand implementations for bloomwell-cli
// ABOUTME: Each command parses its JSON input and returns a serializable result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

pub mod contractions;
pub mod kicks;
pub mod plan;
pub mod rewards;
