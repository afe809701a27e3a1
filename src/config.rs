// Copyright (c) 2025 - Cowboy AI, Inc.
//! Codec Configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SCS_FLAVOR_STRATEGY` | `v3` | parsing strategy preset |
//! | `SCS_FLAVOR_OUTPUT` | `none` | `none`, `prose` or `json` |

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{FlavorNameError, FlavorNameResult};
use crate::versioning::ParsingStrategy;

pub const STRATEGY_VAR: &str = "SCS_FLAVOR_STRATEGY";
pub const OUTPUT_VAR: &str = "SCS_FLAVOR_OUTPUT";

/// What to print for each accepted name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Validate only
    #[default]
    None,
    /// English description
    Prose,
    /// Extra specs as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = FlavorNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "prose" => Ok(Self::Prose),
            "json" => Ok(Self::Json),
            other => Err(FlavorNameError::Configuration(format!(
                "unknown output format {other:?}; expected none, prose or json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Prose => "prose",
            Self::Json => "json",
        };
        write!(f, "{}", name)
    }
}

/// Configuration of the flavor name checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Parsing strategy preset name, see [`ParsingStrategy::PRESETS`]
    pub strategy: String,
    pub output: OutputFormat,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strategy: "v3".to_string(),
            output: OutputFormat::None,
        }
    }
}

impl CodecConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> FlavorNameResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> FlavorNameResult<Self> {
        let defaults = Self::default();
        let strategy = lookup(STRATEGY_VAR)
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.strategy);
        let output = match lookup(OUTPUT_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.output,
        };

        let config = Self { strategy, output };
        config.parsing_strategy()?;
        Ok(config)
    }

    /// Resolve the configured strategy preset
    pub fn parsing_strategy(&self) -> FlavorNameResult<ParsingStrategy> {
        ParsingStrategy::preset(&self.strategy)
    }
}
