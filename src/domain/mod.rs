// Copyright (c) 2025 - Cowboy AI, Inc.
//! Flavor Name Domain Model
//!
//! Typed representation of an SCS flavor name, independent of any textual
//! syntax version.
//!
//! # Value Objects with Invariants
//!
//! - [`CpuRam`] - vCPU count, CPU type and RAM (mandatory)
//! - [`Disk`] - root disk count, size and type
//! - [`Hypervisor`] - hypervisor code
//! - [`HwVirt`] - nested virtualization flag
//! - [`CpuBrand`] - CPU vendor, generation and performance class
//! - [`Gpu`] - GPU type, brand, generation, compute units and VRAM
//! - [`Infiniband`] - Infiniband flag
//!
//! # Aggregate
//!
//! - [`FlavorName`] - one [`CpuRam`] plus up to six optional components
//!
//! Each component declares its attributes through [`AttrDescriptor`]s whose
//! kinds reference the lookup tables in [`tables`]. Constructing a component
//! always validates it, so a [`FlavorName`] can never hold an invalid value.

pub mod accelerator;
pub mod attribute;
pub mod component;
pub mod compute;
pub mod flavor_name;
pub mod form;
pub mod platform;
pub mod storage;
pub mod tables;

pub use accelerator::Gpu;
pub use attribute::{format_half, AttrDescriptor, AttrKind, AttrValue};
pub use component::{Component, ComponentKind, ValueReader};
pub use compute::{CpuBrand, CpuRam};
pub use flavor_name::FlavorName;
pub use platform::{HwVirt, Hypervisor, Infiniband};
pub use storage::{Disk, DEFAULT_DISK_COUNT};
pub use tables::{DependentTable, Table};
