//! # Router Module
//!
//! The router module provides the route table: an append-only sequence of route
//! descriptors with exact-match (path, method) lookup.
//!
//! ## Overview
//!
//! The route table is responsible for:
//! - Recording every route produced by the scan phase
//! - Matching incoming (path, method) pairs to a descriptor
//! - Preserving first-registered-wins semantics for duplicate routes
//!
//! ## Matching
//!
//! Lookup is a linear scan with exact string equality on the path and exact
//! method equality - no trailing-slash or case normalization. The first
//! structural match wins, so a duplicate (path, method) registration is shadowed
//! by the earlier one (the duplicate is logged at `warn` when appended).
//!
//! The scan is intentionally O(n): route counts are small, the table is built
//! once at startup, and exact matching keeps per-request work to a handful of
//! string comparisons. An indexed table would have to preserve the same
//! first-registered-wins contract.

mod core;

pub use core::{RouteDescriptor, RouteTable};
