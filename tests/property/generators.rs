// Copyright (c) 2025 - Cowboy AI, Inc.
//! Generators for Valid Flavor Name Records
//!
//! Values are drawn from the lookup tables themselves. Two combinations are
//! excluded because they have no distinct textual form: a cleared HwVirt or
//! Infiniband flag, and GPU VRAM (or its bandwidth) without compute units.
//! A CPU generation of zero is also excluded since it renders as absent.

use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;
use scs_flavor_name::domain::tables::{
    Table, CPU_GEN, CPU_PERF, CPU_TYPE, CPU_VENDOR, DISK_TYPE, GPU_BRAND, GPU_GEN, GPU_PERF,
    GPU_TYPE, GPU_VRAM_PERF, HYPERVISOR,
};
use scs_flavor_name::{CpuBrand, CpuRam, Disk, FlavorName, Gpu, HwVirt, Hypervisor, Infiniband};

fn codes(table: &'static Table) -> Vec<&'static str> {
    table.codes().collect()
}

prop_compose! {
    pub fn arb_cpuram()(
        cpus in 1u32..=256,
        cputype in select(codes(&CPU_TYPE)),
        cpuinsecure in any::<bool>(),
        half_gib in 1u32..=2048,
        raminsecure in any::<bool>(),
        ramoversubscribed in any::<bool>(),
    ) -> CpuRam {
        CpuRam::with_flags(
            cpus,
            cputype,
            cpuinsecure,
            f64::from(half_gib) / 2.0,
            raminsecure,
            ramoversubscribed,
        )
        .expect("generated CPU/RAM is valid")
    }
}

prop_compose! {
    pub fn arb_disk()(
        nrdisks in 1u32..=8,
        disksize in option::of(1u32..=5000),
        disktype in select(codes(&DISK_TYPE)),
    ) -> Disk {
        Disk::with_count(nrdisks, disksize, disktype).expect("generated disk is valid")
    }
}

pub fn arb_hypervisor() -> impl Strategy<Value = Hypervisor> {
    select(codes(&HYPERVISOR))
        .prop_map(|hype| Hypervisor::new(hype).expect("generated hypervisor is valid"))
}

pub fn arb_cpubrand() -> impl Strategy<Value = CpuBrand> {
    select(codes(&CPU_VENDOR))
        .prop_flat_map(|vendor| {
            let mut gens: Vec<Option<u32>> = vec![None];
            if let Some(table) = CPU_GEN.select(vendor) {
                gens.extend(
                    table
                        .codes()
                        .filter_map(|code| code.parse::<u32>().ok())
                        .filter(|gen| *gen != 0)
                        .map(Some),
                );
            }
            (Just(vendor), select(gens), select(codes(&CPU_PERF)))
        })
        .prop_map(|(vendor, gen, perf)| {
            CpuBrand::new(vendor, gen, perf).expect("generated CPU brand is valid")
        })
}

pub fn arb_gpu() -> impl Strategy<Value = Gpu> {
    (select(codes(&GPU_TYPE)), select(codes(&GPU_BRAND)))
        .prop_flat_map(|(gputype, brand)| {
            let gens = GPU_GEN
                .select(brand)
                .map(|table| table.codes().collect::<Vec<_>>())
                .unwrap_or_else(|| vec![""]);
            (
                Just(gputype),
                Just(brand),
                select(gens),
                option::of((1u32..=512, option::of((1u32..=256, select(codes(&GPU_VRAM_PERF)))))),
                select(codes(&GPU_PERF)),
            )
        })
        .prop_map(|(gputype, brand, gen, sizes, perf)| {
            let (cu, vram, vramperf) = match sizes {
                Some((cu, Some((vram, vramperf)))) => (Some(cu), Some(vram), vramperf),
                Some((cu, None)) => (Some(cu), None, ""),
                None => (None, None, ""),
            };
            Gpu::new(gputype, brand, gen, cu, vram)
                .and_then(|gpu| gpu.with_performance(perf, vramperf))
                .expect("generated GPU is valid")
        })
}

pub fn arb_flavor() -> impl Strategy<Value = FlavorName> {
    (
        arb_cpuram(),
        option::of(arb_disk()),
        option::of(arb_hypervisor()),
        any::<bool>(),
        option::of(arb_cpubrand()),
        option::of(arb_gpu()),
        any::<bool>(),
    )
        .prop_map(|(cpuram, disk, hype, hwvirt, cpubrand, gpu, ib)| {
            let mut flavor = FlavorName::new(cpuram);
            if let Some(disk) = disk {
                flavor = flavor.with_disk(disk);
            }
            if let Some(hype) = hype {
                flavor = flavor.with_hypervisor(hype);
            }
            if hwvirt {
                flavor = flavor.with_hwvirt(HwVirt::new(true).expect("hwvirt flag is valid"));
            }
            if let Some(cpubrand) = cpubrand {
                flavor = flavor.with_cpubrand(cpubrand);
            }
            if let Some(gpu) = gpu {
                flavor = flavor.with_gpu(gpu);
            }
            if ib {
                flavor = flavor.with_infiniband(Infiniband::new(true).expect("ib flag is valid"));
            }
            flavor
        })
}
