// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Generators for valid flavor name records and the laws checked over them.

mod generators;
mod round_trip;
