// Copyright (c) 2025 - Cowboy AI, Inc.
//! SCS flavor names
//!
//! Parses, validates, renders and describes the standardized names of the
//! Sovereign Cloud Stack compute flavors, e.g. `SCS-2V-8-20s_i3h`.
//!
//! ```rust
//! use scs_flavor_name::{describe, ParsingStrategy};
//!
//! let outcome = ParsingStrategy::latest().parse("SCS-2V-8-20s_i3h").unwrap();
//! assert_eq!(outcome.flavor.to_string(), "SCS-2V-8-20s_i3h");
//! assert!(describe(&outcome.flavor).contains("High Perf Intel Ice Lake"));
//! ```

pub mod config;
pub mod describe;
pub mod domain;
pub mod errors;
pub mod extra_specs;
pub mod syntax;
pub mod versioning;

// Re-export commonly used types
pub use config::{CodecConfig, OutputFormat};
pub use describe::describe;
pub use domain::{
    ComponentKind, CpuBrand, CpuRam, Disk, FlavorName, Gpu, HwVirt, Hypervisor, Infiniband,
};
pub use errors::{FlavorNameError, FlavorNameResult};
pub use extra_specs::{flavor_spec, CpuClass, DiskClass, FlavorSpec};
pub use syntax::{render, Parser, SyntaxVersion};
pub use versioning::{to_current, to_legacy, ParseOutcome, ParsingStrategy, VersionMismatchWarning};
