// Copyright (c) 2025 - Cowboy AI, Inc.
//! Flavor Name Checker
//!
//! Validates the flavor names given as arguments and optionally prints a
//! description or the derived extra specs of each.
//!
//! Run with: cargo run --bin flavor-name -- v3 SCS-2V-8-20s SCS-4C-16 -o prose
//!
//! The first argument selects the parsing strategy preset. With `v2/v1`, names
//! of both syntaxes are accepted but legacy ones are reported as merely
//! tolerated; `v1/v2` works the other way round.
//!
//! Configuration:
//! 1. `SCS_FLAVOR_OUTPUT` is the output format used when `-o` is absent
//! 2. `RUST_LOG` controls log verbosity
//!
//! The exit code is the number of invalid names, capped at 255.

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::Parser;
use scs_flavor_name::{
    describe, flavor_spec, CodecConfig, FlavorNameError, OutputFormat, ParsingStrategy,
};
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(name = "flavor-name")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate SCS flavor names, optionally turning them into prose or extra specs", long_about = None)]
struct Cli {
    /// Parsing strategy preset
    #[arg(
        value_name = "VERSION",
        value_parser = PossibleValuesParser::new(ParsingStrategy::PRESETS),
        ignore_case = true
    )]
    strategy: String,

    /// Flavor names to check
    names: Vec<String>,

    /// Output format (default: SCS_FLAVOR_OUTPUT, then none)
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Print a line for every accepted name
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut config = CodecConfig::from_env().context("Invalid flavor name checker configuration")?;
    config.strategy = cli.strategy;
    if let Some(output) = cli.output {
        config.output = output;
    }
    let strategy = config.parsing_strategy()?;
    debug!("Using strategy {} with output {}", strategy.name(), config.output);

    let mut errors = 0usize;
    for name in &cli.names {
        if !check(&strategy, config.output, cli.verbose, name)? {
            errors += 1;
        }
    }

    info!("Checked {} names, {} invalid", cli.names.len(), errors);
    std::process::exit(errors.min(255) as i32);
}

/// Check one name; returns whether it was acceptable
fn check(strategy: &ParsingStrategy, output: OutputFormat, verbose: bool, name: &str) -> Result<bool> {
    let outcome = match strategy.parse(name) {
        Ok(outcome) => outcome,
        Err(err) if err.is_not_scs_name() => {
            println!("{err}");
            return Ok(true);
        }
        Err(err @ FlavorNameError::ForbiddenVersion { .. }) => {
            println!("{err}");
            return Ok(false);
        }
        Err(err) => {
            println!("{err}: {name}");
            return Ok(false);
        }
    };

    match output {
        OutputFormat::None if verbose => println!("OK: {name}"),
        OutputFormat::None => debug!("OK: {}", name),
        OutputFormat::Prose => println!("{}: {}", name, describe(&outcome.flavor)),
        OutputFormat::Json => {
            let spec = flavor_spec(std::slice::from_ref(&outcome.flavor), name)?;
            let json = serde_json::to_string_pretty(&spec)
                .with_context(|| format!("Failed to serialize extra specs of {name}"))?;
            println!("{json}");
        }
    }
    Ok(true)
}
