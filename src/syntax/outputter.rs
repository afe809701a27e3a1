// Copyright (c) 2025 - Cowboy AI, Inc.
//! Flavor Name Renderer
//!
//! Renders a [`FlavorName`] in current (v2/v3) syntax through one small
//! template per component. Each `%` directive consumes the next attribute in
//! declaration order:
//!
//! | Directive | Output |
//! |-----------|--------|
//! | `%?` | the attribute's letter if the flag is set |
//! | `%s`, `%i` | the value as is |
//! | `%f` | half-float, no decimals when whole, one otherwise |
//! | `%x` | `{n}x` unless the value equals the attribute default |
//! | `%0` | the value unless absent or zero |
//! | `%-` | `-{n}` unless absent |

use std::sync::LazyLock;

use super::PREFIX;
use crate::domain::{format_half, AttrDescriptor, AttrValue, Component, ComponentKind, FlavorName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Flag,
    Raw,
    Half,
    Count,
    NonZero,
    Dashed,
}

impl Directive {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(Self::Flag),
            's' | 'i' => Some(Self::Raw),
            'f' => Some(Self::Half),
            'x' => Some(Self::Count),
            '0' => Some(Self::NonZero),
            '-' => Some(Self::Dashed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Directive(Directive),
}

/// Compiled output template of one component
#[derive(Debug, Clone)]
pub struct Template {
    kind: ComponentKind,
    pieces: Vec<Piece>,
}

impl Template {
    fn compile(kind: ComponentKind, source: &str) -> Result<Self, String> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            let spec = chars.next().ok_or_else(|| format!("dangling % in {source:?}"))?;
            let directive = Directive::from_char(spec).ok_or_else(|| format!("unknown directive %{spec} in {source:?}"))?;
            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(&mut literal)));
            }
            pieces.push(Piece::Directive(directive));
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Ok(Self { kind, pieces })
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Number of attributes the template consumes
    pub fn directive_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|piece| matches!(piece, Piece::Directive(_)))
            .count()
    }

    fn render_into(&self, descriptors: &[AttrDescriptor], values: &[AttrValue], out: &mut String) {
        let mut attrs = descriptors.iter().zip(values);
        for piece in &self.pieces {
            let directive = match piece {
                Piece::Literal(text) => {
                    out.push_str(text);
                    continue;
                }
                Piece::Directive(directive) => directive,
            };
            let Some((descriptor, value)) = attrs.next() else {
                break;
            };
            match directive {
                Directive::Flag => {
                    if value.is_truthy() {
                        out.push_str(descriptor.letter().unwrap_or_default());
                    }
                }
                Directive::Raw => out.push_str(&value.to_string()),
                Directive::Half => match value {
                    AttrValue::Float(v) => out.push_str(&format_half(*v)),
                    other => out.push_str(&other.to_string()),
                },
                Directive::Count => {
                    if descriptor.default_value().as_ref() != Some(value) {
                        out.push_str(&format!("{value}x"));
                    }
                }
                Directive::NonZero => {
                    if value.is_truthy() {
                        out.push_str(&value.to_string());
                    }
                }
                Directive::Dashed => {
                    if value.is_truthy() {
                        out.push_str(&format!("-{value}"));
                    }
                }
            }
        }
    }
}

/// Renderer holding the compiled templates of all components
#[derive(Debug)]
pub struct Outputter {
    prefix: &'static str,
    templates: Vec<Template>,
}

impl Outputter {
    fn current() -> Self {
        let sources = [
            (ComponentKind::CpuRam, "%i%s%?-%f%?%?"),
            (ComponentKind::Disk, "-%x%0%s"),
            (ComponentKind::Hypervisor, "_%s"),
            (ComponentKind::HwVirt, "_%?"),
            (ComponentKind::CpuBrand, "_%s%0%s"),
            (ComponentKind::Gpu, "_%s%s%s%-%s%-%s"),
            (ComponentKind::Infiniband, "_%?"),
        ];
        let templates = sources
            .into_iter()
            .map(|(kind, source)| Template::compile(kind, source))
            .collect::<Result<Vec<_>, _>>()
            .expect("output templates are well-formed");
        Self {
            prefix: PREFIX,
            templates,
        }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn render(&self, flavor: &FlavorName) -> String {
        let mut out = String::from(self.prefix);
        self.write(Some(&flavor.cpuram), &mut out);
        self.write(flavor.disk.as_ref(), &mut out);
        self.write(flavor.hype.as_ref(), &mut out);
        self.write(flavor.hwvirt.as_ref(), &mut out);
        self.write(flavor.cpubrand.as_ref(), &mut out);
        self.write(flavor.gpu.as_ref(), &mut out);
        self.write(flavor.ib.as_ref(), &mut out);
        out
    }

    fn write<C: Component>(&self, component: Option<&C>, out: &mut String) {
        let Some(component) = component else {
            return;
        };
        if let Some(template) = self.templates.iter().find(|t| t.kind == C::KIND) {
            template.render_into(C::descriptors(), &component.values(), out);
        }
    }
}

static OUTPUTTER: LazyLock<Outputter> = LazyLock::new(Outputter::current);

/// Render `flavor` in current syntax
pub fn render(flavor: &FlavorName) -> String {
    OUTPUTTER.render(flavor)
}
