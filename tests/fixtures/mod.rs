// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for scs-flavor-name
//!
//! Canonical names and the records they parse into. Every name listed in
//! [`CANONICAL_NAMES`] renders back unchanged after parsing.

#![allow(dead_code)]

use scs_flavor_name::{CpuBrand, CpuRam, Disk, FlavorName, Gpu, HwVirt, Hypervisor, Infiniband};

/// Names in current syntax that are their own canonical form
pub const CANONICAL_NAMES: &[&str] = &[
    "SCS-1L-1",
    "SCS-2V-4-20s",
    "SCS-2V-4-50",
    "SCS-4C-16-2x200p",
    "SCS-8Ti-32.5uo",
    "SCS-1V-4_i3_ib",
    "SCS-2V-8-20s_i3h",
    "SCS-4Ci-8-100n_xen",
    "SCS-16T-64_kvm_hwv_z4hh",
    "SCS-2V-8_a2",
    "SCS-2V-8_r",
    "SCS-4V-16_GNv-80",
    "SCS-8C-32_gA3.5-16h-24hh",
    "SCS-16T-64-3x10s_bms_hwv_i3h_GNa-64h_ib",
];

/// The richest fixture in current syntax
pub const FULL_NAME: &str = "SCS-16T-64-3x10s_bms_hwv_i3h_GNa-64h_ib";

/// [`FULL_NAME`] in legacy syntax
pub const FULL_NAME_V1: &str = "SCS-16T:64:3x10s-bms-hwv-i3h-GNa:64h-ib";

/// Record for [`FULL_NAME`]
pub fn full_flavor() -> FlavorName {
    FlavorName::new(CpuRam::new(16, "T", 64.0).expect("Invalid CPU/RAM in fixture"))
        .with_disk(Disk::with_count(3, Some(10), "s").expect("Invalid disk in fixture"))
        .with_hypervisor(Hypervisor::new("bms").expect("Invalid hypervisor in fixture"))
        .with_hwvirt(HwVirt::new(true).expect("Invalid hwvirt in fixture"))
        .with_cpubrand(CpuBrand::new("i", Some(3), "h").expect("Invalid CPU brand in fixture"))
        .with_gpu(
            Gpu::new("G", "N", "a", Some(64), None)
                .and_then(|gpu| gpu.with_performance("h", ""))
                .expect("Invalid GPU in fixture"),
        )
        .with_infiniband(Infiniband::new(true).expect("Invalid infiniband in fixture"))
}

/// Record for `SCS-2V-8-20s_i3h`
pub fn brand_flavor() -> FlavorName {
    FlavorName::new(CpuRam::new(2, "V", 8.0).expect("Invalid CPU/RAM in fixture"))
        .with_disk(Disk::new(Some(20), "s").expect("Invalid disk in fixture"))
        .with_cpubrand(CpuBrand::new("i", Some(3), "h").expect("Invalid CPU brand in fixture"))
}
