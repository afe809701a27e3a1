// Copyright (c) 2025 - Cowboy AI, Inc.
//! Component Grammars
//!
//! One anchored regular expression per component and syntax version. Capture
//! groups appear in the same order as the component's attribute descriptors,
//! which the parser relies on when coercing captures.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::domain::ComponentKind;

/// Grammar of a single component
#[derive(Debug)]
pub struct ComponentGrammar {
    kind: ComponentKind,
    pattern: Regex,
    /// The match must be followed by end of input or this delimiter
    boundary: Option<char>,
}

impl ComponentGrammar {
    fn new(kind: ComponentKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: Regex::new(&format!("^(?:{pattern})")).expect("component grammar is a valid regex"),
            boundary: None,
        }
    }

    fn bounded_by(mut self, delimiter: char) -> Self {
        self.boundary = Some(delimiter);
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Number of capture groups, excluding the implicit whole-match group
    pub fn capture_count(&self) -> usize {
        self.pattern.captures_len() - 1
    }

    /// Match at the start of `input`
    ///
    /// The captured character classes never include the boundary delimiter,
    /// so rejecting a match that is not followed by it is equivalent to a
    /// lookahead assertion.
    pub fn match_at<'h>(&self, input: &'h str) -> Option<Captures<'h>> {
        let captures = self.pattern.captures(input)?;
        let end = captures.get(0)?.end();
        if let Some(delimiter) = self.boundary {
            let rest = &input[end..];
            if !(rest.is_empty() || rest.starts_with(delimiter)) {
                return None;
            }
        }
        Some(captures)
    }
}

/// Complete grammar of one syntax version
#[derive(Debug)]
pub struct Grammar {
    /// Separates CPU/RAM from Disk and precedes sub-values such as GPU compute units
    value_delimiter: char,
    /// Precedes every extension component
    component_delimiter: char,
    components: [ComponentGrammar; 7],
}

impl Grammar {
    /// Build a grammar from its two delimiters
    fn with_delimiters(value_delimiter: char, component_delimiter: char) -> Self {
        let v = regex::escape(&value_delimiter.to_string());
        let c = regex::escape(&component_delimiter.to_string());
        Self {
            value_delimiter,
            component_delimiter,
            components: [
                ComponentGrammar::new(
                    ComponentKind::CpuRam,
                    &format!(r"([0-9]*)([LVTC])(i|){v}([0-9\.]*)(u|)(o|)"),
                ),
                ComponentGrammar::new(ComponentKind::Disk, &format!(r"{v}(?:([0-9]*)x|)([0-9]*)([nhsp]|)")),
                ComponentGrammar::new(ComponentKind::Hypervisor, &format!(r"{c}(kvm|xen|vmw|hyv|bms)")),
                ComponentGrammar::new(ComponentKind::HwVirt, &format!(r"{c}(hwv)")),
                ComponentGrammar::new(ComponentKind::CpuBrand, &format!(r"{c}([izar])([0-9]*)(h*)"))
                    .bounded_by(component_delimiter),
                ComponentGrammar::new(
                    ComponentKind::Gpu,
                    &format!(r"{c}([gG])([NAI])([^{v}h{c}]*)(?:{v}([0-9]+)|)(h*)(?:{v}([0-9]+)|)(h*)"),
                ),
                ComponentGrammar::new(ComponentKind::Infiniband, &format!(r"{c}(ib)")),
            ],
        }
    }

    pub fn value_delimiter(&self) -> char {
        self.value_delimiter
    }

    pub fn component_delimiter(&self) -> char {
        self.component_delimiter
    }

    /// All component grammars in parse order
    pub fn components(&self) -> &[ComponentGrammar] {
        &self.components
    }

    pub fn component(&self, kind: ComponentKind) -> &ComponentGrammar {
        let idx = ComponentKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        &self.components[idx]
    }
}

static V1: LazyLock<Grammar> = LazyLock::new(|| Grammar::with_delimiters(':', '-'));
static V2: LazyLock<Grammar> = LazyLock::new(|| Grammar::with_delimiters('-', '_'));

/// Legacy grammar: `SCS-2V:4:20s-i3`
pub fn v1() -> &'static Grammar {
    &V1
}

/// Current grammar, shared by v2 and v3: `SCS-2V-4-20s_i3`
pub fn v2() -> &'static Grammar {
    &V2
}
