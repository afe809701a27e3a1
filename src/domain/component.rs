// Copyright (c) 2025 - Cowboy AI, Inc.
//! Flavor Name Components
//!
//! A component is one semantic group of attributes within a flavor name. Each
//! concrete component type declares its attributes through a static
//! descriptor list; the generic [`Component`] trait lets the parser, the
//! renderer and the form reader work over any component positionally.

use serde::Serialize;
use std::fmt;

use super::attribute::{validate_all, AttrDescriptor, AttrValue};
use crate::errors::{FlavorNameError, FlavorNameResult};

/// The seven component kinds, in parse order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    CpuRam,
    Disk,
    Hypervisor,
    HwVirt,
    CpuBrand,
    Gpu,
    Infiniband,
}

impl ComponentKind {
    /// All kinds in parse and render order
    pub const ALL: [ComponentKind; 7] = [
        Self::CpuRam,
        Self::Disk,
        Self::Hypervisor,
        Self::HwVirt,
        Self::CpuBrand,
        Self::Gpu,
        Self::Infiniband,
    ];

    /// Short name used as form key prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CpuRam => "cpuram",
            Self::Disk => "disk",
            Self::Hypervisor => "hype",
            Self::HwVirt => "hwvirt",
            Self::CpuBrand => "cpubrand",
            Self::Gpu => "gpu",
            Self::Infiniband => "ib",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CpuRam => "CPU-RAM",
            Self::Disk => "Disk",
            Self::Hypervisor => "Hypervisor",
            Self::HwVirt => "Hardware/NestedVirtualization",
            Self::CpuBrand => "CPUBrand",
            Self::Gpu => "GPU",
            Self::Infiniband => "Infiniband",
        }
    }

    /// Whether the component may be omitted from a flavor name
    pub fn is_optional(&self) -> bool {
        !matches!(self, Self::CpuRam)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A typed component backed by an ordered attribute descriptor list
pub trait Component: Sized + Clone + PartialEq + fmt::Debug {
    const KIND: ComponentKind;

    /// Attributes in declaration order
    fn descriptors() -> &'static [AttrDescriptor];

    /// Current values, positionally aligned with [`Component::descriptors`]
    fn values(&self) -> Vec<AttrValue>;

    /// Build the typed component from already-validated values
    fn assemble(values: ValueReader) -> FlavorNameResult<Self>;

    /// Validate `values` in declaration order and build the component
    fn from_values(values: Vec<AttrValue>) -> FlavorNameResult<Self> {
        validate_all(Self::KIND, Self::descriptors(), &values)?;
        Self::assemble(ValueReader::new(Self::KIND, Self::descriptors(), values))
    }
}

/// Positional reader handing out typed values to [`Component::assemble`]
pub struct ValueReader {
    component: ComponentKind,
    descriptors: &'static [AttrDescriptor],
    values: std::vec::IntoIter<AttrValue>,
    position: usize,
}

impl ValueReader {
    pub fn new(
        component: ComponentKind,
        descriptors: &'static [AttrDescriptor],
        values: Vec<AttrValue>,
    ) -> Self {
        Self {
            component,
            descriptors,
            values: values.into_iter(),
            position: 0,
        }
    }

    pub fn int(&mut self) -> FlavorNameResult<u32> {
        match self.next()? {
            AttrValue::Int(n) => Ok(n),
            other => Err(self.mismatch(other)),
        }
    }

    pub fn opt_int(&mut self) -> FlavorNameResult<Option<u32>> {
        match self.next()? {
            AttrValue::OptInt(n) => Ok(n),
            other => Err(self.mismatch(other)),
        }
    }

    pub fn float(&mut self) -> FlavorNameResult<f64> {
        match self.next()? {
            AttrValue::Float(v) => Ok(v),
            other => Err(self.mismatch(other)),
        }
    }

    pub fn flag(&mut self) -> FlavorNameResult<bool> {
        match self.next()? {
            AttrValue::Flag(b) => Ok(b),
            other => Err(self.mismatch(other)),
        }
    }

    pub fn code(&mut self) -> FlavorNameResult<String> {
        match self.next()? {
            AttrValue::Code(s) => Ok(s),
            other => Err(self.mismatch(other)),
        }
    }

    fn next(&mut self) -> FlavorNameResult<AttrValue> {
        let value = self.values.next().ok_or(FlavorNameError::AttributeValidation {
            component: self.component,
            attribute: self.attribute_name(),
            value: String::new(),
            reason: "missing value",
        })?;
        self.position += 1;
        Ok(value)
    }

    fn attribute_name(&self) -> &'static str {
        self.descriptors
            .get(self.position)
            .map(|d| d.name)
            .unwrap_or("*")
    }

    fn mismatch(&self, value: AttrValue) -> FlavorNameError {
        let attribute = self
            .descriptors
            .get(self.position.saturating_sub(1))
            .map(|d| d.name)
            .unwrap_or("*");
        FlavorNameError::AttributeValidation {
            component: self.component,
            attribute,
            value: value.to_string(),
            reason: "has the wrong type",
        }
    }
}
