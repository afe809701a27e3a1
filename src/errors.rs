// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for flavor name operations

use thiserror::Error;

use crate::domain::ComponentKind;
use crate::syntax::SyntaxVersion;

/// Errors that can occur while parsing, validating or constructing flavor names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlavorNameError {
    /// Input does not carry the `SCS-` prefix; out of scope rather than malformed
    #[error("NOT an SCS flavor: {0}")]
    NotAnScsName(String),

    /// The mandatory CPU/RAM component did not match
    #[error("Failed to parse main part of {name} ({version})")]
    MalformedMainComponent { name: String, version: SyntaxVersion },

    /// Characters left over after every component was attempted
    #[error("Extra characters: {suffix} ({version})")]
    TrailingGarbage {
        name: String,
        suffix: String,
        version: SyntaxVersion,
    },

    /// A value failed its attribute's validation rule
    #[error("{component}: {attribute} can not be set to {value:?}; {reason}")]
    AttributeValidation {
        component: ComponentKind,
        attribute: &'static str,
        value: String,
        reason: &'static str,
    },

    /// A code is missing from the attribute's lookup table
    #[error("{component}: {attribute} can not be set to {code:?}; must be one of {accepted:?}")]
    UnknownTableEntry {
        component: ComponentKind,
        attribute: &'static str,
        code: String,
        accepted: Vec<String>,
    },

    /// A deliberately obsolete syntax version parsed the name
    #[error("Name is non-tolerable {version}: {name}")]
    ForbiddenVersion { name: String, version: SyntaxVersion },

    /// Form input that cannot be converted to the attribute's type
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Unknown parsing strategy preset
    #[error("Unknown parsing strategy: {0}")]
    UnknownStrategy(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FlavorNameError {
    /// Whether the input was simply not an SCS name (callers usually skip these)
    pub fn is_not_scs_name(&self) -> bool {
        matches!(self, FlavorNameError::NotAnScsName(_))
    }
}

/// Result type for flavor name operations
pub type FlavorNameResult<T> = Result<T, FlavorNameError>;
