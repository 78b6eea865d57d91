//! stoich - command-line entry point
//!
//! Parses each formula given on the command line (or each non-empty stdin
//! line) and prints its element counts.

mod config;
mod logging;
mod render;

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use crate::config::Config;

fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Config::parse();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    logging::init_logging(&config);

    let inputs = if config.formulas.is_empty() {
        read_stdin().context("Failed to read formulas from stdin")?
    } else {
        config.formulas.clone()
    };
    tracing::debug!(count = inputs.len(), "Parsing formulas");

    let stdout = io::stdout();
    let failures = run(&config, &inputs, &mut stdout.lock())?;

    if failures > 0 {
        tracing::warn!(failures, total = inputs.len(), "Some formulas failed to parse");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parses and renders each input, returning how many failed.
fn run(config: &Config, inputs: &[String], out: &mut impl Write) -> anyhow::Result<usize> {
    let mut failures = 0usize;

    for input in inputs {
        let outcome = stoich_formula::parse(input);
        if let Err(e) = &outcome {
            failures += 1;
            tracing::info!(input = %input, error = %e, "Formula rejected");
        }
        writeln!(out, "{}", render::render(config.format, input, &outcome)?)
            .context("Failed to write output")?;

        if outcome.is_err() && config.fail_fast {
            break;
        }
    }

    Ok(failures)
}

fn read_stdin() -> io::Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .filter_map(|line| match line {
            Ok(l) if l.trim().is_empty() => None,
            Ok(l) => Some(Ok(l.trim().to_string())),
            Err(e) => Some(Err(e)),
        })
        .collect()
}
