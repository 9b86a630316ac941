// ABOUTME: Command-line front end for the Bloomwell library
// ABOUTME: Builds fitness plans and replays kick, contraction, and rewards logs from JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloomwell Maternal Health

//! # bloomwell-cli
//!
//! ```bash
//! # Plan from a profile file
//! bloomwell-cli plan --profile profile.json --pretty
//!
//! # Plan from stdin, first 4 items of each list, TOON output
//! echo '{"trimester":"2nd"}' | bloomwell-cli plan --limit 4 --format toon
//!
//! # Replay logs
//! bloomwell-cli kicks --log kicks.json
//! bloomwell-cli contractions --log contractions.json
//! bloomwell-cli rewards --log rewards.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use bloomwell::config::BloomwellConfig;
use bloomwell::constants::display::PREVIEW_ITEMS;
use bloomwell::formatters::OutputFormat;
use bloomwell::logging::init_logging;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::helpers::io::{emit, read_input, RenderOptions};

#[derive(Parser)]
#[command(
    name = "bloomwell-cli",
    version,
    about = "Bloomwell maternal wellness toolkit",
    long_about = "Pregnancy-aware fitness guidance, kick counting, contraction timing, and rewards"
)]
struct Cli {
    /// Output format (json or toon); defaults to BLOOMWELL_OUTPUT_FORMAT
    #[arg(long, global = true, value_parser = parse_output_format)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build exercise guidance from a caregiving profile
    Plan {
        /// Profile JSON file; stdin when omitted or `-`
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Keep only the first N items of each list
        #[arg(long, conflicts_with = "preview")]
        limit: Option<usize>,

        /// Compact view with the first few items of each list
        #[arg(long)]
        preview: bool,
    },
    /// Replay a kick counting log and report the session status
    Kicks {
        /// Kick log JSON file; stdin when omitted or `-`
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Replay timed contractions and evaluate the labor alert
    Contractions {
        /// Contraction log JSON file; stdin when omitted or `-`
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Replay reward events and report ledger totals
    Rewards {
        /// Rewards log JSON file; stdin when omitted or `-`
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

fn parse_output_format(raw: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse_strict(raw).ok_or_else(|| format!("unknown format '{raw}' (json, toon)"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BloomwellConfig::from_env()?;
    if cli.verbose {
        config.logging.level = "debug".to_owned();
    }
    init_logging(&config.logging)?;
    debug!(?config, "Starting bloomwell-cli");

    let render = RenderOptions {
        format: cli.format.unwrap_or(config.output_format),
        pretty: cli.pretty,
    };
    let now = Utc::now();

    match cli.command {
        Command::Plan {
            profile,
            limit,
            preview,
        } => {
            let input = read_input(profile.as_deref())?;
            let limit = limit.or_else(|| preview.then_some(PREVIEW_ITEMS));
            emit(&commands::plan::run(&input, limit)?, render)?;
        }
        Command::Kicks { log } => {
            let input = read_input(log.as_deref())?;
            emit(&commands::kicks::run(&input, &config.kick_counter, now)?, render)?;
        }
        Command::Contractions { log } => {
            let input = read_input(log.as_deref())?;
            emit(
                &commands::contractions::run(&input, config.contractions, now)?,
                render,
            )?;
        }
        Command::Rewards { log } => {
            let input = read_input(log.as_deref())?;
            emit(&commands::rewards::run(&input, &config.rewards)?, render)?;
        }
    }

    Ok(())
}
