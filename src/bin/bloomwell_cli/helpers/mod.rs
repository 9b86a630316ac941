// ABOUTME: Shared helpers for bloomwell-cli commands
// ABOUTME: Input loading and result rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

pub mod io;
