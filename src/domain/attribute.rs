// Copyright (c) 2025 - Cowboy AI, Inc.
//! Attribute Model
//!
//! Every component declares an ordered list of [`AttrDescriptor`]s. The
//! descriptors are the single source of truth for which attributes exist, in
//! what order, how a grammar capture is coerced into a value, and how that
//! value is validated. Parser and renderer both iterate them positionally.
//!
//! # Validation order
//!
//! A [`AttrKind::DependentEnum`] reads the value of its selector sibling, so
//! values are always validated in declaration order: the selector is declared
//! (and therefore validated) before the attribute that depends on it.

use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;

use super::component::ComponentKind;
use super::tables::{DependentTable, Table};
use crate::errors::{FlavorNameError, FlavorNameResult};

/// Semantic type of an attribute
#[derive(Debug, Clone, Copy)]
pub enum AttrKind {
    /// Integer > 0, always present
    PositiveInt,
    /// Integer > 0 or absent; an empty capture yields `default`
    OptionalPositiveInt { default: Option<u32> },
    /// Positive multiple of 0.5
    PositiveHalfFloat,
    /// Boolean rendered as presence of `letter`
    Flag { letter: &'static str },
    /// Code drawn from a fixed table
    Enum(&'static Table),
    /// Code drawn from the table selected by the sibling at index `selector`.
    /// Numeric dependents are captured as integers and looked up by their
    /// decimal spelling; absence is the empty code.
    DependentEnum {
        selector: usize,
        table: &'static DependentTable,
        numeric: bool,
    },
}

/// One attribute of one component
#[derive(Debug, Clone, Copy)]
pub struct AttrDescriptor {
    /// Field name, also used as form key suffix
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub kind: AttrKind,
}

impl AttrDescriptor {
    pub const fn new(name: &'static str, label: &'static str, kind: AttrKind) -> Self {
        Self { name, label, kind }
    }

    /// Default value for an empty capture, if the attribute has one
    pub fn default_value(&self) -> Option<AttrValue> {
        match self.kind {
            AttrKind::OptionalPositiveInt { default } => Some(AttrValue::OptInt(default)),
            AttrKind::Flag { .. } => Some(AttrValue::Flag(false)),
            AttrKind::DependentEnum { numeric: true, .. } => Some(AttrValue::OptInt(None)),
            _ => None,
        }
    }

    /// Letter emitted for a set flag
    pub fn letter(&self) -> Option<&'static str> {
        match self.kind {
            AttrKind::Flag { letter } => Some(letter),
            _ => None,
        }
    }

    /// Convert a grammar capture into a typed value (not yet validated).
    ///
    /// `None` and the empty string both mean "nothing matched".
    pub fn coerce(&self, component: ComponentKind, capture: Option<&str>) -> FlavorNameResult<AttrValue> {
        let raw = capture.unwrap_or("");
        match self.kind {
            AttrKind::PositiveInt => self
                .parse_int(component, raw, "must be positive integer")
                .map(AttrValue::Int),
            AttrKind::OptionalPositiveInt { default } => {
                if raw.is_empty() {
                    Ok(AttrValue::OptInt(default))
                } else {
                    self.parse_int(component, raw, "must be positive integer")
                        .map(|n| AttrValue::OptInt(Some(n)))
                }
            }
            AttrKind::PositiveHalfFloat => raw
                .parse::<f64>()
                .map(AttrValue::Float)
                .map_err(|_| self.invalid(component, raw, "must be positive multiple of 0.5")),
            AttrKind::Flag { .. } => Ok(AttrValue::Flag(!raw.is_empty())),
            AttrKind::Enum(_) => Ok(AttrValue::Code(raw.to_string())),
            AttrKind::DependentEnum { numeric: true, .. } => {
                if raw.is_empty() {
                    Ok(AttrValue::OptInt(None))
                } else {
                    self.parse_int(component, raw, "must be a generation number")
                        .map(|n| AttrValue::OptInt(Some(n)))
                }
            }
            AttrKind::DependentEnum { numeric: false, .. } => Ok(AttrValue::Code(raw.to_string())),
        }
    }

    /// Validate `value` given the already-validated `siblings` that precede it
    pub fn validate(
        &self,
        component: ComponentKind,
        value: &AttrValue,
        siblings: &[AttrValue],
    ) -> FlavorNameResult<()> {
        match (self.kind, value) {
            (AttrKind::PositiveInt, AttrValue::Int(n)) => {
                if *n == 0 {
                    return Err(self.invalid(component, &value.to_string(), "must be positive integer"));
                }
                Ok(())
            }
            (AttrKind::OptionalPositiveInt { .. }, AttrValue::OptInt(n)) => {
                if *n == Some(0) {
                    return Err(self.invalid(component, &value.to_string(), "must be positive integer"));
                }
                Ok(())
            }
            (AttrKind::PositiveHalfFloat, AttrValue::Float(f)) => {
                if !f.is_finite() || *f <= 0.0 || (2.0 * f).fract() != 0.0 {
                    return Err(self.invalid(
                        component,
                        &value.to_string(),
                        "must be positive multiple of 0.5",
                    ));
                }
                Ok(())
            }
            (AttrKind::Flag { .. }, AttrValue::Flag(_)) => Ok(()),
            (AttrKind::Enum(table), AttrValue::Code(code)) => self.check_table(component, table, code),
            (AttrKind::DependentEnum { selector, table, .. }, value @ (AttrValue::Code(_) | AttrValue::OptInt(_))) => {
                let key = siblings.get(selector).map(AttrValue::code).unwrap_or_default();
                match table.select(&key) {
                    Some(selected) => self.check_table(component, selected, &value.code()),
                    None => Err(FlavorNameError::UnknownTableEntry {
                        component,
                        attribute: self.name,
                        code: value.code(),
                        accepted: Vec::new(),
                    }),
                }
            }
            _ => Err(self.invalid(component, &value.to_string(), "has the wrong type")),
        }
    }

    /// Resolve the human-readable label of a table-backed value
    pub fn resolve_label(&self, value: &AttrValue, siblings: &[AttrValue]) -> Option<&'static str> {
        match self.kind {
            AttrKind::Enum(table) => table.resolve(&value.code()),
            AttrKind::DependentEnum { selector, table, .. } => {
                let key = siblings.get(selector).map(AttrValue::code)?;
                table.resolve_dependent(&key, &value.code())
            }
            _ => None,
        }
    }

    /// The table a value of this attribute is checked against, given its siblings
    pub fn table(&self, siblings: &[AttrValue]) -> Option<&'static Table> {
        match self.kind {
            AttrKind::Enum(table) => Some(table),
            AttrKind::DependentEnum { selector, table, .. } => {
                siblings.get(selector).and_then(|key| table.select(&key.code()))
            }
            _ => None,
        }
    }

    fn check_table(&self, component: ComponentKind, table: &Table, code: &str) -> FlavorNameResult<()> {
        if table.contains(code) {
            Ok(())
        } else {
            Err(FlavorNameError::UnknownTableEntry {
                component,
                attribute: self.name,
                code: code.to_string(),
                accepted: table.codes().map(str::to_string).collect(),
            })
        }
    }

    /// Integers beyond `u32` are reported as out of range, not as malformed
    fn parse_int(&self, component: ComponentKind, raw: &str, reason: &'static str) -> FlavorNameResult<u32> {
        raw.parse::<u32>().map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow => self.invalid(component, raw, "exceeds supported range"),
            _ => self.invalid(component, raw, reason),
        })
    }

    fn invalid(&self, component: ComponentKind, value: &str, reason: &'static str) -> FlavorNameError {
        FlavorNameError::AttributeValidation {
            component,
            attribute: self.name,
            value: value.to_string(),
            reason,
        }
    }
}

/// A typed attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Int(u32),
    OptInt(Option<u32>),
    Float(f64),
    Flag(bool),
    Code(String),
}

impl AttrValue {
    /// Lookup-table spelling of the value
    pub fn code(&self) -> String {
        match self {
            AttrValue::OptInt(None) => String::new(),
            other => other.to_string(),
        }
    }

    /// Python-style truthiness: zero, absent, false and empty are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Int(n) => *n != 0,
            AttrValue::OptInt(n) => n.is_some_and(|n| n != 0),
            AttrValue::Float(f) => *f != 0.0,
            AttrValue::Flag(b) => *b,
            AttrValue::Code(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::OptInt(Some(n)) => write!(f, "{}", n),
            AttrValue::OptInt(None) => Ok(()),
            AttrValue::Float(v) if v.fract() == 0.0 => write!(f, "{:.0}", v),
            AttrValue::Float(v) => write!(f, "{}", v),
            AttrValue::Flag(b) => write!(f, "{}", b),
            AttrValue::Code(s) => write!(f, "{}", s),
        }
    }
}

/// Format a half-integer with no decimals when whole, one decimal otherwise
pub fn format_half(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Validate a full value list against a descriptor list, in declaration order
pub fn validate_all(
    component: ComponentKind,
    descriptors: &[AttrDescriptor],
    values: &[AttrValue],
) -> FlavorNameResult<()> {
    if descriptors.len() != values.len() {
        return Err(FlavorNameError::AttributeValidation {
            component,
            attribute: "*",
            value: values.len().to_string(),
            reason: "unexpected number of attributes",
        });
    }
    for (idx, (descriptor, value)) in descriptors.iter().zip(values).enumerate() {
        descriptor.validate(component, value, &values[..idx])?;
    }
    Ok(())
}
