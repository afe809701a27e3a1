// Copyright (c) 2025 - Cowboy AI, Inc.
//! Syntax Version Compatibility
//!
//! Converts names between the legacy (v1) and current (v2/v3) delimiter
//! conventions and combines single-version parsers into a [`ParsingStrategy`].
//!
//! # Strategy
//!
//! ```text
//! primary parsers ──ok──▶ FlavorName
//!      │ all fail
//!      ▼
//! tolerated parsers ──ok──▶ FlavorName + VersionMismatchWarning
//!      │ all fail
//!      ▼
//! invalid parsers ──ok──▶ ForbiddenVersion
//!      │ all fail
//!      ▼
//! first primary error
//! ```
//!
//! A name without the `SCS-` prefix short-circuits with
//! [`FlavorNameError::NotAnScsName`] before any version is tried.

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::domain::FlavorName;
use crate::errors::{FlavorNameError, FlavorNameResult};
use crate::syntax::{Parser, SyntaxVersion, PREFIX};

/// Rewrite a current-syntax name into legacy syntax
///
/// `SCS-2V-4-20s_i3` becomes `SCS-2V:4:20s-i3`.
pub fn to_legacy(name: &str) -> String {
    name.replace('-', ":").replace('_', "-").replace("SCS:", "SCS-")
}

/// Rewrite a legacy name into current syntax
///
/// `SCS-2V:4:20s-i3` becomes `SCS-2V-4-20s_i3`.
pub fn to_current(name: &str) -> String {
    name.replace('-', "_").replace(':', "-").replace("SCS_", "SCS-")
}

/// A name was accepted only through a tolerated syntax version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionMismatchWarning {
    pub name: String,
    pub version: SyntaxVersion,
}

impl fmt::Display for VersionMismatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name is merely tolerated {}: {}", self.version, self.name)
    }
}

/// Successful strategy result
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub flavor: FlavorName,
    pub warning: Option<VersionMismatchWarning>,
}

impl ParseOutcome {
    pub fn is_tolerated(&self) -> bool {
        self.warning.is_some()
    }
}

/// Ordered combination of primary, tolerated and invalid syntax versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingStrategy {
    name: String,
    primary: Vec<SyntaxVersion>,
    tolerated: Vec<SyntaxVersion>,
    invalid: Vec<SyntaxVersion>,
}

impl ParsingStrategy {
    /// Names of the built-in presets
    pub const PRESETS: [&'static str; 8] = [
        "v1", "v1/v2", "v2/v1", "v2", "v3", "v3/v2/v1", "latest", "vN",
    ];

    /// Create an empty strategy; add versions with the builder methods
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary: Vec::new(),
            tolerated: Vec::new(),
            invalid: Vec::new(),
        }
    }

    pub fn primary(mut self, version: SyntaxVersion) -> Self {
        self.primary.push(version);
        self
    }

    pub fn tolerate(mut self, version: SyntaxVersion) -> Self {
        self.tolerated.push(version);
        self
    }

    pub fn forbid(mut self, version: SyntaxVersion) -> Self {
        self.invalid.push(version);
        self
    }

    /// Look up a built-in preset by name (case-insensitive)
    pub fn preset(name: &str) -> FlavorNameResult<Self> {
        use SyntaxVersion::*;

        let strategy = match name.to_lowercase().as_str() {
            "v1" => Self::new("v1").primary(V1).forbid(V2),
            "v1/v2" => Self::new("v1/v2").primary(V1).tolerate(V2),
            "v2/v1" => Self::new("v2/v1").primary(V2).tolerate(V1),
            "v2" => Self::new("v2").primary(V2).forbid(V1),
            "v3" | "latest" => Self::new("v3").primary(V3).forbid(V1),
            "v3/v2/v1" => Self::new("v3/v2/v1").primary(V3).tolerate(V2).tolerate(V1),
            "vn" => Self::new("vN").primary(V2).primary(V1),
            _ => return Err(FlavorNameError::UnknownStrategy(name.to_string())),
        };
        Ok(strategy)
    }

    /// The strategy accepting the latest version and rejecting legacy names
    pub fn latest() -> Self {
        Self::new("v3").primary(SyntaxVersion::V3).forbid(SyntaxVersion::V1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_versions(&self) -> &[SyntaxVersion] {
        &self.primary
    }

    pub fn tolerated_versions(&self) -> &[SyntaxVersion] {
        &self.tolerated
    }

    pub fn invalid_versions(&self) -> &[SyntaxVersion] {
        &self.invalid
    }

    /// Parse `name` according to this strategy
    pub fn parse(&self, name: &str) -> FlavorNameResult<ParseOutcome> {
        if !name.starts_with(PREFIX) {
            return Err(FlavorNameError::NotAnScsName(name.to_string()));
        }

        let mut first_error = None;
        for version in &self.primary {
            match Parser::new(*version).parse(name) {
                Ok(flavor) => return Ok(ParseOutcome { flavor, warning: None }),
                Err(err) => {
                    debug!("{} rejected {}: {}", version, name, err);
                    first_error.get_or_insert(err);
                }
            }
        }

        for version in &self.tolerated {
            if let Ok(flavor) = Parser::new(*version).parse(name) {
                let warning = VersionMismatchWarning {
                    name: name.to_string(),
                    version: *version,
                };
                warn!("{}", warning);
                return Ok(ParseOutcome {
                    flavor,
                    warning: Some(warning),
                });
            }
        }

        for version in &self.invalid {
            if Parser::new(*version).parse(name).is_ok() {
                return Err(FlavorNameError::ForbiddenVersion {
                    name: name.to_string(),
                    version: *version,
                });
            }
        }

        Err(first_error.unwrap_or_else(|| FlavorNameError::MalformedMainComponent {
            name: name.to_string(),
            version: self.primary.first().copied().unwrap_or(SyntaxVersion::LATEST),
        }))
    }
}

impl Default for ParsingStrategy {
    fn default() -> Self {
        Self::latest()
    }
}
