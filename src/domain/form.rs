// Copyright (c) 2025 - Cowboy AI, Inc.
//! Form Input
//!
//! Builds a [`FlavorName`] from loosely typed key/value input such as an
//! HTML form submission. Keys are `"{component}.{attribute}"`, e.g.
//! `cpuram.cpus` or `gpu.brand`. Every converted value still goes through the
//! attribute model, so form input can never produce an invalid record.

use std::collections::BTreeMap;
use tracing::debug;

use super::accelerator::Gpu;
use super::attribute::{AttrDescriptor, AttrKind, AttrValue};
use super::component::{Component, ComponentKind};
use super::compute::{CpuBrand, CpuRam};
use super::flavor_name::FlavorName;
use super::platform::{HwVirt, Hypervisor, Infiniband};
use super::storage::Disk;
use crate::errors::{FlavorNameError, FlavorNameResult};

/// Placeholder some forms submit for "no selection"
const NO_SELECTION: &str = "NN";

impl FlavorName {
    /// Build a flavor name from form fields
    ///
    /// An optional component (other than the disk) is left out when its first
    /// attribute is empty or false. A disk without a size is left out as well.
    pub fn from_form<S: AsRef<str>>(form: &BTreeMap<String, S>) -> FlavorNameResult<Self> {
        let cpuram = read_component::<CpuRam, S>(form)?.ok_or_else(|| FlavorNameError::InvalidInput {
            field: "cpuram".to_string(),
            reason: "CPU/RAM component is mandatory".to_string(),
        })?;
        let disk = read_component::<Disk, S>(form)?.filter(|disk| disk.disksize().is_some());

        Ok(Self {
            cpuram,
            disk,
            hype: read_component::<Hypervisor, S>(form)?,
            hwvirt: read_component::<HwVirt, S>(form)?,
            cpubrand: read_component::<CpuBrand, S>(form)?,
            gpu: read_component::<Gpu, S>(form)?,
            ib: read_component::<Infiniband, S>(form)?,
        })
    }
}

fn read_component<C: Component, S: AsRef<str>>(form: &BTreeMap<String, S>) -> FlavorNameResult<Option<C>> {
    let kind = C::KIND;
    let may_bail = kind.is_optional() && kind != ComponentKind::Disk;
    let mut values: Vec<AttrValue> = Vec::with_capacity(C::descriptors().len());

    for (idx, descriptor) in C::descriptors().iter().enumerate() {
        let field = format!("{}.{}", kind.as_str(), descriptor.name);
        let raw = form
            .get(&field)
            .map(|value| value.as_ref())
            .filter(|value| *value != NO_SELECTION)
            .unwrap_or("");

        if may_bail && idx == 0 && raw.is_empty() {
            debug!("Form leaves out {}", kind);
            return Ok(None);
        }

        let value = convert_input(&field, descriptor, raw, &values)?;
        if may_bail && idx == 0 && !value.is_truthy() {
            debug!("Form leaves out {}", kind);
            return Ok(None);
        }
        descriptor.validate(kind, &value, &values)?;
        values.push(value);
    }

    C::from_values(values).map(Some)
}

/// Convert user input into the attribute's value type
fn convert_input(
    field: &str,
    descriptor: &AttrDescriptor,
    raw: &str,
    siblings: &[AttrValue],
) -> FlavorNameResult<AttrValue> {
    let invalid = |reason: String| FlavorNameError::InvalidInput {
        field: field.to_string(),
        reason,
    };

    match descriptor.kind {
        AttrKind::Flag { .. } => parse_flag(raw)
            .map(AttrValue::Flag)
            .ok_or_else(|| invalid(format!("{raw:?} is not a yes/no value"))),
        AttrKind::PositiveHalfFloat => raw
            .parse::<f64>()
            .map(AttrValue::Float)
            .map_err(|_| invalid(format!("{raw:?} is not a number"))),
        AttrKind::PositiveInt => parse_canonical_int(raw)
            .map(AttrValue::Int)
            .ok_or_else(|| invalid(format!("{raw:?} is not an integer"))),
        AttrKind::OptionalPositiveInt { .. } | AttrKind::DependentEnum { numeric: true, .. } => {
            if raw.is_empty() {
                descriptor
                    .default_value()
                    .ok_or_else(|| invalid("a value is required".to_string()))
            } else {
                parse_canonical_int(raw)
                    .map(|n| AttrValue::OptInt(Some(n)))
                    .ok_or_else(|| invalid(format!("{raw:?} is not an integer")))
            }
        }
        AttrKind::Enum(_) | AttrKind::DependentEnum { numeric: false, .. } => {
            let table = descriptor
                .table(siblings)
                .ok_or_else(|| invalid("no table for the selected value".to_string()))?;
            [raw.to_string(), raw.to_uppercase(), raw.to_lowercase()]
                .into_iter()
                .find(|candidate| table.contains(candidate))
                .map(AttrValue::Code)
                .ok_or_else(|| {
                    invalid(format!(
                        "{raw:?} not in {:?}",
                        table.codes().collect::<Vec<_>>()
                    ))
                })
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    let upper = raw.to_uppercase();
    match upper.as_str() {
        "" | "OFF" | "0" => Some(false),
        "1" | "ON" => Some(true),
        other if other.starts_with('N') || other.starts_with('F') => Some(false),
        other if other.starts_with('Y') || other.starts_with('T') => Some(true),
        _ => None,
    }
}

/// Integers must be spelled canonically (no sign, no leading zeros)
fn parse_canonical_int(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|n| n.to_string() == raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_minimal_form() {
        let input = form(&[
            ("cpuram.cpus", "2"),
            ("cpuram.cputype", "v"),
            ("cpuram.ram", "8"),
            ("disk.disksize", "20"),
            ("disk.disktype", "S"),
        ]);
        let name = FlavorName::from_form(&input).unwrap();
        assert_eq!(name.to_string(), "SCS-2V-8-20s");
    }

    #[test]
    fn test_optional_components_bail_on_empty_first_field() {
        let input = form(&[
            ("cpuram.cpus", "4"),
            ("cpuram.cputype", "C"),
            ("cpuram.ram", "16"),
            ("hype.hype", "NN"),
            ("hwvirt.hwvirt", "no"),
            ("cpubrand.cpuvendor", "z"),
            ("cpubrand.cpugen", "4"),
            ("cpubrand.perf", "H"),
            ("ib.ib", "yes"),
        ]);
        let name = FlavorName::from_form(&input).unwrap();
        assert!(name.hypervisor().is_none());
        assert!(name.hwvirt().is_none());
        assert!(name.disk().is_none());
        assert_eq!(name.to_string(), "SCS-4C-16_z4h_ib");
    }

    #[test]
    fn test_dependent_table_resolved_from_form() {
        let input = form(&[
            ("cpuram.cpus", "8"),
            ("cpuram.cputype", "T"),
            ("cpuram.ram", "32"),
            ("gpu.gputype", "G"),
            ("gpu.brand", "n"),
            ("gpu.gen", "V"),
            ("gpu.cu", "80"),
        ]);
        let name = FlavorName::from_form(&input).unwrap();
        assert_eq!(name.gpu().unwrap().gen(), "v");
        assert_eq!(name.to_string(), "SCS-8T-32_GNv-80");
    }

    #[test]
    fn test_invalid_form_values() {
        let input = form(&[("cpuram.cpus", "02"), ("cpuram.cputype", "V"), ("cpuram.ram", "4")]);
        assert!(matches!(
            FlavorName::from_form(&input),
            Err(FlavorNameError::InvalidInput { .. })
        ));

        let input = form(&[("cpuram.cpus", "2"), ("cpuram.cputype", "V"), ("cpuram.ram", "4.3")]);
        assert!(matches!(
            FlavorName::from_form(&input),
            Err(FlavorNameError::AttributeValidation { .. })
        ));

        let input = form(&[
            ("cpuram.cpus", "2"),
            ("cpuram.cputype", "V"),
            ("cpuram.ram", "4"),
            ("hwvirt.hwvirt", "maybe"),
        ]);
        assert!(FlavorName::from_form(&input).is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("x"), None);
    }
}
