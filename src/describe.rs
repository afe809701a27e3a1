// Copyright (c) 2025 - Cowboy AI, Inc.
//! Human-readable flavor descriptions

use crate::domain::{format_half, AttrValue, Component, FlavorName};

/// Describe `flavor` as an English sentence
///
/// `SCS-2V-8-20s_i3h` reads "SCS flavor with 2 High Perf Intel Ice Lake vCPUs
/// with 8 GiB RAM and SSD 20GB root volume".
pub fn describe(flavor: &FlavorName) -> String {
    let cpuram = flavor.cpuram();
    let mut out = format!("SCS flavor with {} ", cpuram.cpus());

    match flavor.cpubrand() {
        Some(brand) => {
            out.push_str(&label(brand, "perf", true));
            out.push_str(&label(brand, "cpuvendor", false));
            out.push_str(&label(brand, "cpugen", true));
        }
        None => out.push_str("generic x86-64 "),
    }
    out.push_str(&label(cpuram, "cputype", false));
    if cpuram.cpuinsecure() {
        out.push_str("(insecure) ");
    }

    out.push_str(&format!("with {} GiB RAM ", format_half(cpuram.ram())));
    let ram_attrs: Vec<&str> = [
        (cpuram.raminsecure(), "noECC"),
        (cpuram.ramoversubscribed(), "oversubscribed"),
    ]
    .into_iter()
    .filter_map(|(set, text)| set.then_some(text))
    .collect();
    if !ram_attrs.is_empty() {
        out.push_str(&format!("({}) ", ram_attrs.join(", ")));
    }

    if let Some(hype) = flavor.hypervisor() {
        out.push_str("on ");
        out.push_str(&label(hype, "hype", false));
    }
    if flavor.hwvirt().is_some_and(|hw| hw.hwvirt()) {
        out.push_str("with HW virt ");
    }

    if let Some(disk) = flavor.disk() {
        out.push_str("and ");
        out.push_str(&label(disk, "disktype", true));
        if disk.nrdisks() != 1 {
            out.push_str(&format!("{}x", disk.nrdisks()));
        }
        if let Some(size) = disk.disksize() {
            out.push_str(&format!("{size}GB "));
        }
        out.push_str("root volume ");
    }

    if let Some(gpu) = flavor.gpu() {
        out.push_str("and ");
        out.push_str(&label(gpu, "gputype", false));
        out.push_str(&label(gpu, "brand", false));
        out.push_str(&label(gpu, "gen", true));
        if let Some(cu) = gpu.cu() {
            out.push_str(&format!("(w/ {cu} {}SMs/CUs/EUs", label(gpu, "perf", true)));
            // VRAM is only stated together with compute units
            match gpu.vram() {
                Some(vram) => out.push_str(&format!(" and {vram} GiB {}VRAM) ", label(gpu, "vramperf", true))),
                None => out.push_str(") "),
            }
        }
    }

    if flavor.infiniband().is_some_and(|ib| ib.ib()) {
        out.push_str("and Infiniband ");
    }

    out.pop();
    out
}

/// Table label of attribute `name` followed by a space
///
/// With `skip_empty`, an empty or zero value yields nothing. Values missing
/// from their table fall back to their own spelling.
fn label<C: Component>(component: &C, name: &str, skip_empty: bool) -> String {
    let values = component.values();
    let Some(idx) = C::descriptors().iter().position(|d| d.name == name) else {
        return String::new();
    };
    let value: &AttrValue = &values[idx];
    if skip_empty && !value.is_truthy() {
        return String::new();
    }
    let text = C::descriptors()[idx]
        .resolve_label(value, &values[..idx])
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string());
    format!("{text} ")
}
