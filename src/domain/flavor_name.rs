// Copyright (c) 2025 - Cowboy AI, Inc.
//! Flavor Name Aggregate
//!
//! A [`FlavorName`] owns one mandatory [`CpuRam`] component and up to six
//! optional components. It is created by the parser, by [`FlavorName::new`]
//! plus the `with_*` builders, or from form input; every component it holds
//! has already been validated.

use serde::Serialize;
use std::fmt;

use super::accelerator::Gpu;
use super::compute::{CpuBrand, CpuRam};
use super::platform::{HwVirt, Hypervisor, Infiniband};
use super::storage::Disk;
use crate::errors::FlavorNameResult;

/// Structured flavor name record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlavorName {
    pub(crate) cpuram: CpuRam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) disk: Option<Disk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hype: Option<Hypervisor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hwvirt: Option<HwVirt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cpubrand: Option<CpuBrand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) gpu: Option<Gpu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) ib: Option<Infiniband>,
}

impl FlavorName {
    /// Create a flavor name consisting of the CPU/RAM component only
    pub fn new(cpuram: CpuRam) -> Self {
        Self {
            cpuram,
            disk: None,
            hype: None,
            hwvirt: None,
            cpubrand: None,
            gpu: None,
            ib: None,
        }
    }

    pub fn with_disk(mut self, disk: Disk) -> Self {
        self.disk = Some(disk);
        self
    }

    pub fn with_hypervisor(mut self, hype: Hypervisor) -> Self {
        self.hype = Some(hype);
        self
    }

    pub fn with_hwvirt(mut self, hwvirt: HwVirt) -> Self {
        self.hwvirt = Some(hwvirt);
        self
    }

    pub fn with_cpubrand(mut self, cpubrand: CpuBrand) -> Self {
        self.cpubrand = Some(cpubrand);
        self
    }

    pub fn with_gpu(mut self, gpu: Gpu) -> Self {
        self.gpu = Some(gpu);
        self
    }

    pub fn with_infiniband(mut self, ib: Infiniband) -> Self {
        self.ib = Some(ib);
        self
    }

    pub fn cpuram(&self) -> &CpuRam {
        &self.cpuram
    }

    pub fn disk(&self) -> Option<&Disk> {
        self.disk.as_ref()
    }

    pub fn hypervisor(&self) -> Option<&Hypervisor> {
        self.hype.as_ref()
    }

    pub fn hwvirt(&self) -> Option<&HwVirt> {
        self.hwvirt.as_ref()
    }

    pub fn cpubrand(&self) -> Option<&CpuBrand> {
        self.cpubrand.as_ref()
    }

    pub fn gpu(&self) -> Option<&Gpu> {
        self.gpu.as_ref()
    }

    pub fn infiniband(&self) -> Option<&Infiniband> {
        self.ib.as_ref()
    }

    /// Canonically shortened name as recommended by the standard
    ///
    /// - Hypervisor and hardware virtualization are dropped
    /// - CPU brand is dropped for x86-64 vendors; other vendors keep only
    ///   the vendor since it carries the architecture
    /// - GPU frequency and bandwidth modifiers are stripped
    pub fn shorten(&self) -> FlavorNameResult<Self> {
        let cpubrand = match &self.cpubrand {
            Some(brand) if !brand.is_x86_64() => Some(CpuBrand::new(brand.cpuvendor(), None, "")?),
            _ => None,
        };
        let gpu = match &self.gpu {
            Some(gpu) => Some(gpu.with_performance("", "")?),
            None => None,
        };
        Ok(Self {
            cpuram: self.cpuram.clone(),
            disk: self.disk.clone(),
            hype: None,
            hwvirt: None,
            cpubrand,
            gpu,
            ib: self.ib.clone(),
        })
    }

    /// Number of present components, including CPU/RAM
    pub fn component_count(&self) -> usize {
        1 + [
            self.disk.is_some(),
            self.hype.is_some(),
            self.hwvirt.is_some(),
            self.cpubrand.is_some(),
            self.gpu.is_some(),
            self.ib.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

impl fmt::Display for FlavorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::syntax::render(self))
    }
}
