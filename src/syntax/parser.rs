// Copyright (c) 2025 - Cowboy AI, Inc.
//! Flavor Name Parser
//!
//! Parses a name left to right against the grammar of one syntax version.
//! The mandatory CPU/RAM component must match directly after the prefix; each
//! optional component is then tried once, in order, and simply skipped when
//! it does not match at the current position.

use regex::Captures;
use tracing::debug;

use super::grammar::Grammar;
use super::{SyntaxVersion, PREFIX};
use crate::domain::{Component, ComponentKind, CpuBrand, CpuRam, Disk, FlavorName, Gpu, HwVirt, Hypervisor, Infiniband};
use crate::errors::{FlavorNameError, FlavorNameResult};

/// Single-version flavor name parser
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    version: SyntaxVersion,
}

impl Parser {
    pub fn new(version: SyntaxVersion) -> Self {
        Self { version }
    }

    pub fn version(&self) -> SyntaxVersion {
        self.version
    }

    /// Parse `name` into a validated [`FlavorName`]
    ///
    /// # Errors
    ///
    /// - [`FlavorNameError::NotAnScsName`] if the prefix is missing
    /// - [`FlavorNameError::MalformedMainComponent`] if CPU/RAM does not match
    /// - [`FlavorNameError::TrailingGarbage`] if input is left over
    /// - a validation error if a matched value is out of range
    pub fn parse(&self, name: &str) -> FlavorNameResult<FlavorName> {
        let Some(body) = name.strip_prefix(PREFIX) else {
            return Err(FlavorNameError::NotAnScsName(name.to_string()));
        };

        let mut ctx = ParseCtx {
            grammar: self.version.grammar(),
            rest: body,
        };

        let cpuram = ctx
            .component::<CpuRam>()?
            .ok_or_else(|| FlavorNameError::MalformedMainComponent {
                name: name.to_string(),
                version: self.version,
            })?;

        let flavor = FlavorName {
            cpuram,
            disk: ctx.component::<Disk>()?,
            hype: ctx.component::<Hypervisor>()?,
            hwvirt: ctx.component::<HwVirt>()?,
            cpubrand: ctx.component::<CpuBrand>()?,
            gpu: ctx.component::<Gpu>()?,
            ib: ctx.component::<Infiniband>()?,
        };

        if !ctx.rest.is_empty() {
            return Err(FlavorNameError::TrailingGarbage {
                name: name.to_string(),
                suffix: ctx.rest.to_string(),
                version: self.version,
            });
        }

        debug!("Parsed {} as {} with {} components", name, self.version, flavor.component_count());
        Ok(flavor)
    }
}

/// Current scan position within one name
struct ParseCtx<'n> {
    grammar: &'static Grammar,
    rest: &'n str,
}

impl<'n> ParseCtx<'n> {
    /// Match `C` at the scan position, advancing past it on success
    fn component<C: Component>(&mut self) -> FlavorNameResult<Option<C>> {
        let grammar = self.grammar.component(C::KIND);
        let Some(captures) = grammar.match_at(self.rest) else {
            return Ok(None);
        };
        let component = build::<C>(&captures)?;
        let consumed = captures.get(0).map_or(0, |m| m.end());
        debug!("Matched {} component {:?}", C::KIND, &self.rest[..consumed]);
        self.rest = &self.rest[consumed..];
        Ok(Some(component))
    }
}

/// Coerce captures positionally and validate them in declaration order
fn build<C: Component>(captures: &Captures<'_>) -> FlavorNameResult<C> {
    let kind: ComponentKind = C::KIND;
    let values = C::descriptors()
        .iter()
        .enumerate()
        .map(|(idx, descriptor)| descriptor.coerce(kind, captures.get(idx + 1).map(|m| m.as_str())))
        .collect::<FlavorNameResult<Vec<_>>>()?;
    C::from_values(values)
}
