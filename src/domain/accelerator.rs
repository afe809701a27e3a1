// Copyright (c) 2025 - Cowboy AI, Inc.
//! GPU Component
//!
//! `_GNa-64h-48hh` reads as: pass-through (`G`) Nvidia (`N`) Ampere (`a`) with
//! 64 SMs at high frequency and 48 GiB of very-high-bandwidth VRAM.

use serde::Serialize;

use super::attribute::{AttrDescriptor, AttrKind, AttrValue};
use super::component::{Component, ComponentKind, ValueReader};
use super::tables::{GPU_BRAND, GPU_GEN, GPU_PERF, GPU_TYPE, GPU_VRAM_PERF};
use crate::errors::FlavorNameResult;

static GPU_ATTRS: [AttrDescriptor; 7] = [
    AttrDescriptor::new("gputype", "Type", AttrKind::Enum(&GPU_TYPE)),
    AttrDescriptor::new("brand", "Brand", AttrKind::Enum(&GPU_BRAND)),
    AttrDescriptor::new(
        "gen",
        "Gen",
        AttrKind::DependentEnum {
            selector: 1,
            table: &GPU_GEN,
            numeric: false,
        },
    ),
    AttrDescriptor::new(
        "cu",
        "N:SMs/A:CUs/I:EUs",
        AttrKind::OptionalPositiveInt { default: None },
    ),
    AttrDescriptor::new("perf", "Frequency", AttrKind::Enum(&GPU_PERF)),
    AttrDescriptor::new("vram", "V:GiB VRAM", AttrKind::OptionalPositiveInt { default: None }),
    AttrDescriptor::new("vramperf", "Bandwidth", AttrKind::Enum(&GPU_VRAM_PERF)),
];

/// GPU attachment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gpu {
    gputype: String,
    brand: String,
    gen: String,
    cu: Option<u32>,
    perf: String,
    vram: Option<u32>,
    vramperf: String,
}

impl Gpu {
    /// Create a validated GPU component with standard frequency and bandwidth
    pub fn new(
        gputype: impl Into<String>,
        brand: impl Into<String>,
        gen: impl Into<String>,
        cu: Option<u32>,
        vram: Option<u32>,
    ) -> FlavorNameResult<Self> {
        Self::from_values(vec![
            AttrValue::Code(gputype.into()),
            AttrValue::Code(brand.into()),
            AttrValue::Code(gen.into()),
            AttrValue::OptInt(cu),
            AttrValue::Code(String::new()),
            AttrValue::OptInt(vram),
            AttrValue::Code(String::new()),
        ])
    }

    /// Replace the frequency and bandwidth modifiers, revalidating the result
    pub fn with_performance(&self, perf: impl Into<String>, vramperf: impl Into<String>) -> FlavorNameResult<Self> {
        let mut values = self.values();
        values[4] = AttrValue::Code(perf.into());
        values[6] = AttrValue::Code(vramperf.into());
        Self::from_values(values)
    }

    /// `g` for vGPU, `G` for pass-through
    pub fn gputype(&self) -> &str {
        &self.gputype
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn gen(&self) -> &str {
        &self.gen
    }

    /// Compute units (SMs, CUs or EUs depending on brand)
    pub fn cu(&self) -> Option<u32> {
        self.cu
    }

    pub fn perf(&self) -> &str {
        &self.perf
    }

    /// VRAM in GiB
    pub fn vram(&self) -> Option<u32> {
        self.vram
    }

    pub fn vramperf(&self) -> &str {
        &self.vramperf
    }
}

impl Component for Gpu {
    const KIND: ComponentKind = ComponentKind::Gpu;

    fn descriptors() -> &'static [AttrDescriptor] {
        &GPU_ATTRS
    }

    fn values(&self) -> Vec<AttrValue> {
        vec![
            AttrValue::Code(self.gputype.clone()),
            AttrValue::Code(self.brand.clone()),
            AttrValue::Code(self.gen.clone()),
            AttrValue::OptInt(self.cu),
            AttrValue::Code(self.perf.clone()),
            AttrValue::OptInt(self.vram),
            AttrValue::Code(self.vramperf.clone()),
        ]
    }

    fn assemble(mut values: ValueReader) -> FlavorNameResult<Self> {
        Ok(Self {
            gputype: values.code()?,
            brand: values.code()?,
            gen: values.code()?,
            cu: values.opt_int()?,
            perf: values.code()?,
            vram: values.opt_int()?,
            vramperf: values.code()?,
        })
    }
}
