// Copyright (c) 2025 - Cowboy AI, Inc.
//! Disk Component
//!
//! Root disk count, size and type (`-20s`, `-3x10p`). A single disk is the
//! default and is never spelled out in canonical names.

use serde::Serialize;

use super::attribute::{AttrDescriptor, AttrKind, AttrValue};
use super::component::{Component, ComponentKind, ValueReader};
use super::tables::DISK_TYPE;
use crate::errors::FlavorNameResult;

/// Number of disks assumed when the count is omitted
pub const DEFAULT_DISK_COUNT: u32 = 1;

static DISK_ATTRS: [AttrDescriptor; 3] = [
    AttrDescriptor::new(
        "nrdisks",
        "NrDisks",
        AttrKind::OptionalPositiveInt {
            default: Some(DEFAULT_DISK_COUNT),
        },
    ),
    AttrDescriptor::new("disksize", "GB Disk", AttrKind::OptionalPositiveInt { default: None }),
    AttrDescriptor::new("disktype", "Disk type", AttrKind::Enum(&DISK_TYPE)),
];

/// Root disk description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Disk {
    nrdisks: u32,
    disksize: Option<u32>,
    disktype: String,
}

impl Disk {
    /// Create a validated single-disk component
    pub fn new(disksize: Option<u32>, disktype: impl Into<String>) -> FlavorNameResult<Self> {
        Self::with_count(DEFAULT_DISK_COUNT, disksize, disktype)
    }

    pub fn with_count(nrdisks: u32, disksize: Option<u32>, disktype: impl Into<String>) -> FlavorNameResult<Self> {
        Self::from_values(vec![
            AttrValue::OptInt(Some(nrdisks)),
            AttrValue::OptInt(disksize),
            AttrValue::Code(disktype.into()),
        ])
    }

    pub fn nrdisks(&self) -> u32 {
        self.nrdisks
    }

    /// Size per disk in GB
    pub fn disksize(&self) -> Option<u32> {
        self.disksize
    }

    /// Disk type code; empty when unspecified
    pub fn disktype(&self) -> &str {
        &self.disktype
    }
}

impl Component for Disk {
    const KIND: ComponentKind = ComponentKind::Disk;

    fn descriptors() -> &'static [AttrDescriptor] {
        &DISK_ATTRS
    }

    fn values(&self) -> Vec<AttrValue> {
        vec![
            AttrValue::OptInt(Some(self.nrdisks)),
            AttrValue::OptInt(self.disksize),
            AttrValue::Code(self.disktype.clone()),
        ]
    }

    fn assemble(mut values: ValueReader) -> FlavorNameResult<Self> {
        Ok(Self {
            nrdisks: values.opt_int()?.unwrap_or(DEFAULT_DISK_COUNT),
            disksize: values.opt_int()?,
            disktype: values.code()?,
        })
    }
}
