// Copyright (c) 2025 - Cowboy AI, Inc.
//! Platform Components: Hypervisor, Hardware Virtualization, Infiniband

use serde::Serialize;

use super::attribute::{AttrDescriptor, AttrKind, AttrValue};
use super::component::{Component, ComponentKind, ValueReader};
use super::tables::HYPERVISOR;
use crate::errors::FlavorNameResult;

static HYPERVISOR_ATTRS: [AttrDescriptor; 1] =
    [AttrDescriptor::new("hype", "Hypervisor", AttrKind::Enum(&HYPERVISOR))];

/// Hypervisor the flavor runs on (`_kvm`, `_bms`, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hypervisor {
    hype: String,
}

impl Hypervisor {
    pub fn new(hype: impl Into<String>) -> FlavorNameResult<Self> {
        Self::from_values(vec![AttrValue::Code(hype.into())])
    }

    pub fn hype(&self) -> &str {
        &self.hype
    }
}

impl Component for Hypervisor {
    const KIND: ComponentKind = ComponentKind::Hypervisor;

    fn descriptors() -> &'static [AttrDescriptor] {
        &HYPERVISOR_ATTRS
    }

    fn values(&self) -> Vec<AttrValue> {
        vec![AttrValue::Code(self.hype.clone())]
    }

    fn assemble(mut values: ValueReader) -> FlavorNameResult<Self> {
        Ok(Self {
            hype: values.code()?,
        })
    }
}

static HW_VIRT_ATTRS: [AttrDescriptor; 1] = [AttrDescriptor::new(
    "hwvirt",
    "HardwareVirt",
    AttrKind::Flag { letter: "hwv" },
)];

/// Nested/hardware virtualization support (`_hwv`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HwVirt {
    hwvirt: bool,
}

impl HwVirt {
    pub fn new(hwvirt: bool) -> FlavorNameResult<Self> {
        Self::from_values(vec![AttrValue::Flag(hwvirt)])
    }

    pub fn hwvirt(&self) -> bool {
        self.hwvirt
    }
}

impl Component for HwVirt {
    const KIND: ComponentKind = ComponentKind::HwVirt;

    fn descriptors() -> &'static [AttrDescriptor] {
        &HW_VIRT_ATTRS
    }

    fn values(&self) -> Vec<AttrValue> {
        vec![AttrValue::Flag(self.hwvirt)]
    }

    fn assemble(mut values: ValueReader) -> FlavorNameResult<Self> {
        Ok(Self {
            hwvirt: values.flag()?,
        })
    }
}

static INFINIBAND_ATTRS: [AttrDescriptor; 1] =
    [AttrDescriptor::new("ib", "IB", AttrKind::Flag { letter: "ib" })];

/// Infiniband networking (`_ib`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Infiniband {
    ib: bool,
}

impl Infiniband {
    pub fn new(ib: bool) -> FlavorNameResult<Self> {
        Self::from_values(vec![AttrValue::Flag(ib)])
    }

    pub fn ib(&self) -> bool {
        self.ib
    }
}

impl Component for Infiniband {
    const KIND: ComponentKind = ComponentKind::Infiniband;

    fn descriptors() -> &'static [AttrDescriptor] {
        &INFINIBAND_ATTRS
    }

    fn values(&self) -> Vec<AttrValue> {
        vec![AttrValue::Flag(self.ib)]
    }

    fn assemble(mut values: ValueReader) -> FlavorNameResult<Self> {
        Ok(Self { ib: values.flag()? })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypervisor() {
        assert_eq!(Hypervisor::new("kvm").unwrap().hype(), "kvm");
        assert!(Hypervisor::new("KVM").is_err());
        assert!(Hypervisor::new("").is_err());
    }

    #[test]
    fn test_flags() {
        assert!(HwVirt::new(true).unwrap().hwvirt());
        assert!(Infiniband::new(true).unwrap().ib());
        assert_eq!(Infiniband::descriptors()[0].letter(), Some("ib"));
        assert_eq!(HwVirt::descriptors()[0].letter(), Some("hwv"));
    }
}
