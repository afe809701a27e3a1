// Copyright (c) 2025 - Cowboy AI, Inc.
//! Lookup Tables for Flavor Name Codes
//!
//! Static code → label vocabularies used by the attribute model. Some tables
//! are *dependent*: the valid code set for one attribute is selected by the
//! value of a sibling attribute (CPU generation by vendor, GPU generation by
//! brand). Absent optional values are represented by the empty code `""`.

/// A flat code → label table
#[derive(Debug)]
pub struct Table {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl Table {
    /// Table name, for diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve a code to its label
    pub fn resolve(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, label)| *label)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.resolve(code).is_some()
    }

    /// Accepted codes in declaration order
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// A two-level table: selector value → code → label
#[derive(Debug)]
pub struct DependentTable {
    name: &'static str,
    tables: &'static [(&'static str, Table)],
}

impl DependentTable {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Select the table for a given selector value
    pub fn select(&self, selector: &str) -> Option<&'static Table> {
        self.tables
            .iter()
            .find(|(key, _)| *key == selector)
            .map(|(_, table)| table)
    }

    /// Resolve a code under a selector; a missing selector or code both yield `None`
    pub fn resolve_dependent(&self, selector: &str, code: &str) -> Option<&'static str> {
        self.select(selector).and_then(|table| table.resolve(code))
    }

    /// Selector values this table knows about
    pub fn selectors(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.iter().map(|(key, _)| *key)
    }
}

pub static CPU_TYPE: Table = Table {
    name: "CPU type",
    entries: &[
        ("L", "LowPerf vCPUs"),
        ("V", "vCPUs"),
        ("T", "SMT Threads"),
        ("C", "Dedicated Cores"),
    ],
};

pub static DISK_TYPE: Table = Table {
    name: "Disk type",
    entries: &[
        ("", "(unspecified)"),
        ("n", "Networked"),
        ("h", "Local HDD"),
        ("s", "SSD"),
        ("p", "HiPerf NVMe"),
    ],
};

pub static HYPERVISOR: Table = Table {
    name: "Hypervisor",
    entries: &[
        ("kvm", "KVM"),
        ("xen", "Xen"),
        ("hyv", "Hyper-V"),
        ("vmw", "VMware"),
        ("bms", "Bare Metal System"),
    ],
};

pub static CPU_VENDOR: Table = Table {
    name: "CPU Vendor",
    entries: &[("i", "Intel"), ("z", "AMD"), ("a", "ARM"), ("r", "RISC-V")],
};

/// CPU generation by vendor; codes are decimal generation numbers
pub static CPU_GEN: DependentTable = DependentTable {
    name: "CPU Gen",
    tables: &[
        (
            "i",
            Table {
                name: "Intel CPU Gen",
                entries: &[
                    ("", "(unspecified)"),
                    ("0", "Unspec/Pre-Skylake"),
                    ("1", "Skylake"),
                    ("2", "Cascade Lake"),
                    ("3", "Ice Lake"),
                    ("4", "Sapphire Rapids"),
                    ("5", "Sierra Forest (E)"),
                    ("6", "Granite Rapids (P)"),
                ],
            },
        ),
        (
            "z",
            Table {
                name: "AMD CPU Gen",
                entries: &[
                    ("", "(unspecified)"),
                    ("0", "Unspec/Pre-Zen"),
                    ("1", "Zen 1"),
                    ("2", "Zen 2"),
                    ("3", "Zen 3"),
                    ("4", "Zen 4/4c"),
                    ("5", "Zen 5/5c"),
                ],
            },
        ),
        (
            "a",
            Table {
                name: "ARM CPU Gen",
                entries: &[
                    ("", "(unspecified)"),
                    ("0", "Unspec/Pre-A76"),
                    ("1", "A76/NeoN1"),
                    ("2", "A78/X1/NeoV1"),
                    ("3", "A71x/NeoN2/V2"),
                    ("4", "AmpereOne"),
                    ("5", "A72x/NeoN3/V3"),
                ],
            },
        ),
        (
            "r",
            Table {
                name: "RISC-V CPU Gen",
                entries: &[("", "(unspecified)"), ("0", "Unspec")],
            },
        ),
    ],
};

pub static CPU_PERF: Table = Table {
    name: "Performance",
    entries: &[
        ("", "Std Perf"),
        ("h", "High Perf"),
        ("hh", "Very High Perf"),
        ("hhh", "Very Very High Perf"),
    ],
};

pub static GPU_TYPE: Table = Table {
    name: "Type",
    entries: &[("g", "vGPU"), ("G", "Pass-Through GPU")],
};

pub static GPU_BRAND: Table = Table {
    name: "Brand",
    entries: &[("N", "Nvidia"), ("A", "AMD"), ("I", "Intel")],
};

pub static GPU_GEN: DependentTable = DependentTable {
    name: "Gen",
    tables: &[
        (
            "N",
            Table {
                name: "Nvidia Gen",
                entries: &[
                    ("", "(unspecified)"),
                    ("f", "Fermi"),
                    ("k", "Kepler"),
                    ("m", "Maxwell"),
                    ("p", "Pascal"),
                    ("v", "Volta"),
                    ("t", "Turing"),
                    ("a", "Ampere"),
                    ("l", "AdaLovelace"),
                    ("g", "GraceHopper"),
                ],
            },
        ),
        (
            "A",
            Table {
                name: "AMD Gen",
                entries: &[
                    ("", "(unspecified)"),
                    ("0.4", "GCN4.0/Polaris"),
                    ("0.5", "GCN5.0/Vega"),
                    ("1", "RDNA1/Navi1x"),
                    ("2", "C/RDNA2/Navi2x"),
                    ("3", "C/RDNA3/Navi3x"),
                    ("3.5", "C/RDNA3.5"),
                    ("4", "C/RDNA4"),
                ],
            },
        ),
        (
            "I",
            Table {
                name: "Intel Gen",
                entries: &[
                    ("", "(unspecified)"),
                    ("0.9", "Gen9/Skylake"),
                    ("0.95", "Gen9.5/KabyLake"),
                    ("1", "Xe1/Gen12.1/DG1"),
                    ("2", "Xe2/Gen12.2"),
                    ("3", "Arc/Gen12.7/DG2"),
                ],
            },
        ),
    ],
};

pub static GPU_PERF: Table = Table {
    name: "Frequency",
    entries: &[("", "Std Freq"), ("h", "High Freq"), ("hh", "Very High Freq")],
};

pub static GPU_VRAM_PERF: Table = Table {
    name: "Bandwidth",
    entries: &[
        ("", "Std BW (<~1GiB/s)"),
        ("h", "High BW"),
        ("hh", "Very High BW"),
    ],
};
