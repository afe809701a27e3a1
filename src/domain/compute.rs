// Copyright (c) 2025 - Cowboy AI, Inc.
//! CPU/RAM and CPU Brand Components
//!
//! [`CpuRam`] is the mandatory first component of every flavor name
//! (`2V-8`, `4Ci-16uo`). [`CpuBrand`] optionally pins the CPU vendor,
//! generation and performance class (`_i3h`).

use serde::Serialize;

use super::attribute::{AttrDescriptor, AttrKind, AttrValue};
use super::component::{Component, ComponentKind, ValueReader};
use super::tables::{CPU_GEN, CPU_PERF, CPU_TYPE, CPU_VENDOR};
use crate::errors::FlavorNameResult;

static CPU_RAM_ATTRS: [AttrDescriptor; 6] = [
    AttrDescriptor::new("cpus", "vCPUs", AttrKind::PositiveInt),
    AttrDescriptor::new("cputype", "CPU type", AttrKind::Enum(&CPU_TYPE)),
    AttrDescriptor::new("cpuinsecure", "Insec SMT", AttrKind::Flag { letter: "i" }),
    AttrDescriptor::new("ram", "GiB RAM", AttrKind::PositiveHalfFloat),
    AttrDescriptor::new("raminsecure", "no ECC", AttrKind::Flag { letter: "u" }),
    AttrDescriptor::new("ramoversubscribed", "RAM Over", AttrKind::Flag { letter: "o" }),
];

/// CPU count and type plus RAM size
///
/// # Invariants
/// - `cpus` > 0
/// - `cputype` ∈ {L, V, T, C}
/// - `ram` is a positive multiple of 0.5 GiB
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuRam {
    cpus: u32,
    cputype: String,
    cpuinsecure: bool,
    ram: f64,
    raminsecure: bool,
    ramoversubscribed: bool,
}

impl CpuRam {
    /// Create a validated CPU/RAM component with no insecurity or oversubscription flags
    pub fn new(cpus: u32, cputype: impl Into<String>, ram: f64) -> FlavorNameResult<Self> {
        Self::with_flags(cpus, cputype, false, ram, false, false)
    }

    /// Create a validated CPU/RAM component with all flags given explicitly
    pub fn with_flags(
        cpus: u32,
        cputype: impl Into<String>,
        cpuinsecure: bool,
        ram: f64,
        raminsecure: bool,
        ramoversubscribed: bool,
    ) -> FlavorNameResult<Self> {
        Self::from_values(vec![
            AttrValue::Int(cpus),
            AttrValue::Code(cputype.into()),
            AttrValue::Flag(cpuinsecure),
            AttrValue::Float(ram),
            AttrValue::Flag(raminsecure),
            AttrValue::Flag(ramoversubscribed),
        ])
    }

    pub fn cpus(&self) -> u32 {
        self.cpus
    }

    pub fn cputype(&self) -> &str {
        &self.cputype
    }

    /// SMT enabled despite known side-channel issues
    pub fn cpuinsecure(&self) -> bool {
        self.cpuinsecure
    }

    /// RAM in GiB
    pub fn ram(&self) -> f64 {
        self.ram
    }

    /// RAM without ECC
    pub fn raminsecure(&self) -> bool {
        self.raminsecure
    }

    pub fn ramoversubscribed(&self) -> bool {
        self.ramoversubscribed
    }
}

impl Component for CpuRam {
    const KIND: ComponentKind = ComponentKind::CpuRam;

    fn descriptors() -> &'static [AttrDescriptor] {
        &CPU_RAM_ATTRS
    }

    fn values(&self) -> Vec<AttrValue> {
        vec![
            AttrValue::Int(self.cpus),
            AttrValue::Code(self.cputype.clone()),
            AttrValue::Flag(self.cpuinsecure),
            AttrValue::Float(self.ram),
            AttrValue::Flag(self.raminsecure),
            AttrValue::Flag(self.ramoversubscribed),
        ]
    }

    fn assemble(mut values: ValueReader) -> FlavorNameResult<Self> {
        Ok(Self {
            cpus: values.int()?,
            cputype: values.code()?,
            cpuinsecure: values.flag()?,
            ram: values.float()?,
            raminsecure: values.flag()?,
            ramoversubscribed: values.flag()?,
        })
    }
}

static CPU_BRAND_ATTRS: [AttrDescriptor; 3] = [
    AttrDescriptor::new("cpuvendor", "CPU Vendor", AttrKind::Enum(&CPU_VENDOR)),
    AttrDescriptor::new(
        "cpugen",
        "CPU Gen",
        AttrKind::DependentEnum {
            selector: 0,
            table: &CPU_GEN,
            numeric: true,
        },
    ),
    AttrDescriptor::new("perf", "Performance", AttrKind::Enum(&CPU_PERF)),
];

/// CPU vendor, generation and performance class
///
/// The generation is validated against the table of the chosen vendor, so
/// `cpugen` 6 is valid for Intel but not for AMD.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuBrand {
    cpuvendor: String,
    cpugen: Option<u32>,
    perf: String,
}

impl CpuBrand {
    pub fn new(cpuvendor: impl Into<String>, cpugen: Option<u32>, perf: impl Into<String>) -> FlavorNameResult<Self> {
        Self::from_values(vec![
            AttrValue::Code(cpuvendor.into()),
            AttrValue::OptInt(cpugen),
            AttrValue::Code(perf.into()),
        ])
    }

    pub fn cpuvendor(&self) -> &str {
        &self.cpuvendor
    }

    pub fn cpugen(&self) -> Option<u32> {
        self.cpugen
    }

    pub fn perf(&self) -> &str {
        &self.perf
    }

    /// Intel and AMD imply x86-64; other vendors carry the architecture
    pub fn is_x86_64(&self) -> bool {
        matches!(self.cpuvendor.as_str(), "i" | "z")
    }
}

impl Component for CpuBrand {
    const KIND: ComponentKind = ComponentKind::CpuBrand;

    fn descriptors() -> &'static [AttrDescriptor] {
        &CPU_BRAND_ATTRS
    }

    fn values(&self) -> Vec<AttrValue> {
        vec![
            AttrValue::Code(self.cpuvendor.clone()),
            AttrValue::OptInt(self.cpugen),
            AttrValue::Code(self.perf.clone()),
        ]
    }

    fn assemble(mut values: ValueReader) -> FlavorNameResult<Self> {
        Ok(Self {
            cpuvendor: values.code()?,
            cpugen: values.opt_int()?,
            perf: values.code()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FlavorNameError;

    #[test]
    fn test_cpu_ram_validation() {
        let cpuram = CpuRam::new(2, "V", 8.0).unwrap();
        assert_eq!(cpuram.cpus(), 2);
        assert_eq!(cpuram.cputype(), "V");
        assert_eq!(cpuram.ram(), 8.0);
        assert!(!cpuram.cpuinsecure());

        assert!(CpuRam::new(0, "V", 8.0).is_err());
        assert!(CpuRam::new(2, "X", 8.0).is_err());
        assert!(CpuRam::new(2, "V", 4.3).is_err());
        assert!(CpuRam::new(2, "V", 4.5).is_ok());
        assert!(CpuRam::new(2, "V", 0.0).is_err());
    }

    #[test]
    fn test_cpu_brand_generation_depends_on_vendor() {
        assert!(CpuBrand::new("i", Some(6), "").is_ok());
        let err = CpuBrand::new("z", Some(6), "").unwrap_err();
        assert!(matches!(err, FlavorNameError::UnknownTableEntry { attribute: "cpugen", .. }));
        assert!(CpuBrand::new("r", None, "").is_ok());
        assert!(CpuBrand::new("r", Some(1), "").is_err());
        assert!(CpuBrand::new("i", Some(3), "hhhh").is_err());
    }

    #[test]
    fn test_is_x86_64() {
        assert!(CpuBrand::new("z", Some(4), "h").unwrap().is_x86_64());
        assert!(!CpuBrand::new("a", Some(1), "").unwrap().is_x86_64());
    }
}
