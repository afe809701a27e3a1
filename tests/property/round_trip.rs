// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Textual Form
//!
//! Rendering and parsing are inverse on every valid record, in both the
//! current and the legacy syntax. The derived outputs (short names,
//! descriptions, extra specs) stay consistent with the canonical name.

use proptest::prelude::*;
use scs_flavor_name::{
    describe, flavor_spec, to_legacy, Parser, ParsingStrategy, SyntaxVersion,
};

use super::generators::arb_flavor;

proptest! {
    /// Property: parse(render(f)) == f
    #[test]
    fn prop_render_then_parse_is_identity(flavor in arb_flavor()) {
        let name = flavor.to_string();
        let parsed = Parser::new(SyntaxVersion::V3).parse(&name);
        prop_assert_eq!(parsed.as_ref(), Ok(&flavor), "name {}", name);
    }

    /// Property: render is a fixpoint after one parse
    #[test]
    fn prop_canonical_form_is_stable(flavor in arb_flavor()) {
        let name = flavor.to_string();
        let reparsed = Parser::new(SyntaxVersion::V2).parse(&name).unwrap();
        prop_assert_eq!(reparsed.to_string(), name);
    }

    /// Property: the legacy spelling parses to the same record
    #[test]
    fn prop_legacy_spelling_round_trips(flavor in arb_flavor()) {
        let legacy = to_legacy(&flavor.to_string());
        let parsed = Parser::new(SyntaxVersion::V1).parse(&legacy);
        prop_assert_eq!(parsed.as_ref(), Ok(&flavor), "legacy name {}", legacy);
    }

    /// Property: a tolerated legacy name succeeds with exactly one warning
    #[test]
    fn prop_tolerated_legacy_warns(flavor in arb_flavor()) {
        let legacy = to_legacy(&flavor.to_string());
        let outcome = ParsingStrategy::preset("v2/v1").unwrap().parse(&legacy).unwrap();
        prop_assert_eq!(&outcome.flavor, &flavor);
        prop_assert_eq!(outcome.warning.map(|w| w.version), Some(SyntaxVersion::V1));
    }

    /// Property: the latest strategy forbids every legacy spelling
    #[test]
    fn prop_latest_forbids_legacy(flavor in arb_flavor()) {
        let legacy = to_legacy(&flavor.to_string());
        let result = ParsingStrategy::latest().parse(&legacy);
        prop_assert!(result.is_err());
    }

    /// Property: shortening is idempotent and yields a parseable name
    #[test]
    fn prop_shorten_is_idempotent(flavor in arb_flavor()) {
        let short = flavor.shorten().unwrap();
        prop_assert_eq!(short.shorten().unwrap(), short.clone());
        prop_assert!(short.to_string().len() <= flavor.to_string().len());
        let reparsed = Parser::new(SyntaxVersion::V3).parse(&short.to_string()).unwrap();
        prop_assert_eq!(reparsed, short);
    }

    /// Property: the description leads with the vCPU count
    #[test]
    fn prop_description_shape(flavor in arb_flavor()) {
        let prose = describe(&flavor);
        let expected_prefix = format!("SCS flavor with {} ", flavor.cpuram().cpus());
        prop_assert!(prose.starts_with(&expected_prefix), "{}", prose);
        prop_assert!(!prose.ends_with(' '));
    }

    /// Property: extra specs list the canonical name, longest spellings first
    #[test]
    fn prop_extra_specs_names(flavor in arb_flavor()) {
        let spec = flavor_spec(std::slice::from_ref(&flavor), "prop").unwrap();
        let names = spec.ordered_names();
        let canonical = flavor.to_string();
        prop_assert!(names.contains(&canonical.as_str()));
        prop_assert!(names.windows(2).all(|pair| pair[0].len() >= pair[1].len()));
        prop_assert_eq!(spec.cpus, flavor.cpuram().cpus());
    }
}
