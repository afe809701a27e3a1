// Copyright (c) 2025 - Cowboy AI, Inc.
//! Flavor Name Syntax
//!
//! Grammars, parser and renderer for the textual form of flavor names.
//!
//! # Versions
//!
//! | Version | CPU/RAM–Disk delimiter | Extension delimiter |
//! |---------|------------------------|---------------------|
//! | v1      | `:`                    | `-`                 |
//! | v2, v3  | `-`                    | `_`                 |
//!
//! The semantic fields are identical across versions; only the delimiters
//! differ. Rendering always produces v2/v3 syntax.

pub mod grammar;
pub mod outputter;
pub mod parser;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::FlavorNameError;

pub use grammar::{ComponentGrammar, Grammar};
pub use outputter::{render, Outputter};
pub use parser::Parser;

/// Literal prefix of every SCS flavor name
pub const PREFIX: &str = "SCS-";

/// Syntax version of the flavor naming standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxVersion {
    V1,
    V2,
    V3,
}

impl SyntaxVersion {
    pub const LATEST: SyntaxVersion = SyntaxVersion::V3;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }

    /// The grammar this version is written in; v3 shares the v2 grammar
    pub fn grammar(&self) -> &'static Grammar {
        match self {
            Self::V1 => grammar::v1(),
            Self::V2 | Self::V3 => grammar::v2(),
        }
    }

    /// Whether this version uses the legacy delimiters
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::V1)
    }
}

impl fmt::Display for SyntaxVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SyntaxVersion {
    type Err = FlavorNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            other => Err(FlavorNameError::Configuration(format!(
                "unknown syntax version: {other}"
            ))),
        }
    }
}
