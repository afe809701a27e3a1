// Copyright (c) 2025 - Cowboy AI, Inc.
//! Flavor Extra Specs
//!
//! Summarizes one or more flavor names that describe the same flavor into the
//! record a flavor manager publishes: resource sizes, CPU and disk classes,
//! and every accepted spelling of the name under `scs:name-v{k}`.

use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use tracing::warn;

use crate::domain::{format_half, FlavorName};
use crate::errors::{FlavorNameError, FlavorNameResult};
use crate::syntax::SyntaxVersion;
use crate::versioning::to_legacy;

/// CPU class, ordered from weakest to strongest guarantee
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CpuClass {
    CrowdedCore,
    SharedCore,
    DedicatedThread,
    DedicatedCore,
}

impl CpuClass {
    /// Class of a CPU type code (`L`, `V`, `T`, `C`)
    pub fn from_cputype(code: &str) -> Option<Self> {
        match code {
            "L" => Some(Self::CrowdedCore),
            "V" => Some(Self::SharedCore),
            "T" => Some(Self::DedicatedThread),
            "C" => Some(Self::DedicatedCore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrowdedCore => "crowded-core",
            Self::SharedCore => "shared-core",
            Self::DedicatedThread => "dedicated-thread",
            Self::DedicatedCore => "dedicated-core",
        }
    }
}

/// Disk class, ordered from slowest to fastest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiskClass {
    Network,
    Hdd,
    Ssd,
    Nvme,
}

impl DiskClass {
    /// Class of a disk type code; an unspecified type counts as networked
    pub fn from_disktype(code: &str) -> Option<Self> {
        match code {
            "" | "n" => Some(Self::Network),
            "h" => Some(Self::Hdd),
            "s" => Some(Self::Ssd),
            "p" => Some(Self::Nvme),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Hdd => "hdd",
            Self::Ssd => "ssd",
            Self::Nvme => "nvme",
        }
    }
}

/// Extra specs derived from a set of flavor names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlavorSpec {
    pub cpus: u32,
    #[serde(rename = "scs:cpu-type")]
    pub cpu_type: CpuClass,
    pub ram: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<u32>,
    /// `scs:disk{i}-type` for every disk
    #[serde(flatten)]
    pub disk_types: BTreeMap<String, DiskClass>,
    /// `scs:name-v{k}`, longest spelling first, legacy before current
    #[serde(flatten)]
    pub names: BTreeMap<String, String>,
}

impl FlavorSpec {
    /// Name spellings in `scs:name-v{k}` order
    pub fn ordered_names(&self) -> Vec<&str> {
        (1..=self.names.len())
            .filter_map(|k| self.names.get(&name_key(k)).map(String::as_str))
            .collect()
    }
}

fn name_key(k: usize) -> String {
    format!("scs:name-v{k}")
}

/// Derive the extra specs for `flavors`, all describing the same flavor
///
/// Values that differ between the names are logged and the maximum wins.
/// `ctx` prefixes those log lines, typically the flavor's name in the cloud.
pub fn flavor_spec(flavors: &[FlavorName], ctx: &str) -> FlavorNameResult<FlavorSpec> {
    let Some(first) = flavors.first() else {
        return Err(FlavorNameError::InvalidInput {
            field: "flavors".to_string(),
            reason: "need to supply at least one flavor name".to_string(),
        });
    };

    let cpus = flavors.iter().map(|f| f.cpuram().cpus()).max().unwrap_or(first.cpuram().cpus());
    let ram = flavors.iter().map(|f| f.cpuram().ram()).fold(first.cpuram().ram(), f64::max);
    let cpu_types: BTreeSet<CpuClass> = flavors
        .iter()
        .filter_map(|f| CpuClass::from_cputype(f.cpuram().cputype()))
        .collect();
    let cpu_type = cpu_types.iter().max().copied().unwrap_or(CpuClass::SharedCore);

    let disks: Vec<_> = flavors.iter().filter_map(FlavorName::disk).collect();
    let disk_sizes: BTreeSet<u32> = disks.iter().filter_map(|d| d.disksize()).collect();
    let disk_counts: BTreeSet<u32> = disks.iter().map(|d| d.nrdisks()).collect();
    let disk_classes: BTreeSet<DiskClass> = disks
        .iter()
        .filter_map(|d| DiskClass::from_disktype(d.disktype()))
        .collect();

    report_inconsistent(ctx, "cpus", flavors.iter().map(|f| f.cpuram().cpus()));
    report_inconsistent(ctx, "ram", flavors.iter().map(|f| format_half(f.cpuram().ram())));
    report_inconsistent(ctx, "scs:cpu-type", cpu_types.iter().map(CpuClass::as_str));
    report_inconsistent(ctx, "disk", disk_sizes.iter());
    report_inconsistent(ctx, "nrdisks", disk_counts.iter());
    report_inconsistent(ctx, "scs:disk0-type", disk_classes.iter().map(DiskClass::as_str));

    let mut disk_types = BTreeMap::new();
    if let Some(class) = disk_classes.iter().max() {
        let count = disk_counts.iter().max().copied().unwrap_or_default();
        for i in 0..count {
            disk_types.insert(format!("scs:disk{i}-type"), *class);
        }
    }

    Ok(FlavorSpec {
        cpus,
        cpu_type,
        ram,
        disk: disk_sizes.iter().max().copied(),
        disk_types,
        names: name_spellings(flavors)?,
    })
}

/// Current and legacy spellings of the full and short names
fn name_spellings(flavors: &[FlavorName]) -> FlavorNameResult<BTreeMap<String, String>> {
    let mut spellings: BTreeSet<(String, SyntaxVersion)> = BTreeSet::new();
    for flavor in flavors {
        for name in [flavor.to_string(), flavor.shorten()?.to_string()] {
            spellings.insert((to_legacy(&name), SyntaxVersion::V1));
            spellings.insert((name, SyntaxVersion::V2));
        }
    }

    let mut ordered: Vec<_> = spellings.into_iter().collect();
    ordered.sort_by_key(|(name, version)| (Reverse(name.len()), *version, name.clone()));
    Ok(ordered
        .into_iter()
        .enumerate()
        .map(|(idx, (name, _))| (name_key(idx + 1), name))
        .collect())
}

fn report_inconsistent<T: Display>(ctx: &str, key: &str, values: impl Iterator<Item = T>) {
    let distinct: BTreeSet<String> = values.map(|v| v.to_string()).collect();
    if distinct.len() > 1 {
        let joined = distinct.into_iter().collect::<Vec<_>>().join(", ");
        if ctx.is_empty() {
            warn!("Inconsistent {}: {}", key, joined);
        } else {
            warn!("{}: Inconsistent {}: {}", ctx, key, joined);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CpuBrand, CpuRam, Disk, Hypervisor};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_flavor_spec() {
        let flavor = FlavorName::new(CpuRam::new(2, "V", 8.0).unwrap())
            .with_disk(Disk::new(Some(20), "s").unwrap())
            .with_cpubrand(CpuBrand::new("i", Some(3), "h").unwrap());
        let spec = flavor_spec(&[flavor], "").unwrap();

        assert_eq!(spec.cpus, 2);
        assert_eq!(spec.cpu_type, CpuClass::SharedCore);
        assert_eq!(spec.ram, 8.0);
        assert_eq!(spec.disk, Some(20));
        assert_eq!(spec.disk_types.get("scs:disk0-type"), Some(&DiskClass::Ssd));
        assert_eq!(
            spec.ordered_names(),
            vec!["SCS-2V:8:20s-i3h", "SCS-2V-8-20s_i3h", "SCS-2V:8:20s", "SCS-2V-8-20s"]
        );
    }

    #[test]
    fn test_spec_takes_maximum() {
        let a = FlavorName::new(CpuRam::new(4, "T", 16.0).unwrap())
            .with_disk(Disk::with_count(2, Some(50), "").unwrap());
        let b = FlavorName::new(CpuRam::new(4, "C", 16.0).unwrap())
            .with_disk(Disk::with_count(2, Some(100), "p").unwrap());
        let spec = flavor_spec(&[a, b], "test").unwrap();

        assert_eq!(spec.cpu_type, CpuClass::DedicatedCore);
        assert_eq!(spec.disk, Some(100));
        assert_eq!(spec.disk_types.len(), 2);
        assert_eq!(spec.disk_types.get("scs:disk1-type"), Some(&DiskClass::Nvme));
    }

    #[test]
    fn test_short_name_deduplicated() {
        let flavor = FlavorName::new(CpuRam::new(1, "L", 1.0).unwrap())
            .with_hypervisor(Hypervisor::new("kvm").unwrap());
        let spec = flavor_spec(&[flavor], "").unwrap();
        assert_eq!(
            spec.ordered_names(),
            vec!["SCS-1L:1-kvm", "SCS-1L-1_kvm", "SCS-1L:1", "SCS-1L-1"]
        );
        assert!(spec.disk.is_none());
        assert!(spec.disk_types.is_empty());
    }

    #[test]
    fn test_serialized_keys() {
        let flavor = FlavorName::new(CpuRam::new(2, "C", 4.0).unwrap())
            .with_disk(Disk::new(Some(10), "").unwrap());
        let value = serde_json::to_value(flavor_spec(&[flavor], "").unwrap()).unwrap();
        assert_eq!(value["scs:cpu-type"], "dedicated-core");
        assert_eq!(value["scs:disk0-type"], "network");
        assert_eq!(value["scs:name-v1"], "SCS-2C:4:10");
        assert_eq!(value["scs:name-v2"], "SCS-2C-4-10");
    }

    #[test]
    fn test_empty_input() {
        assert!(flavor_spec(&[], "").is_err());
    }
}
