//! # Scanner Module
//!
//! The one-time startup scan that turns handler manifests into the route table
//! and factory map the dispatcher serves from.
//!
//! ## Overview
//!
//! Handlers are supplied to the scanner as an explicit, ordered list of
//! [`HandlerEntry`] values - there is no filesystem or module discovery, so scan
//! order is exactly registration order and nothing depends on directory
//! iteration. Each entry carries:
//!
//! - the handler's type name,
//! - a manifest function yielding its [`RouteSpec`] declarations,
//! - the factory the dispatcher will construct it with.
//!
//! ## Route Declarations
//!
//! [`RouteSpec`] is the route-annotation surface: the path and action are
//! required, while the name defaults to `"default_route"` and the method to
//! `GET`. One spec yields one route descriptor.
//!
//! ## Fail-Fast
//!
//! `scan()` runs once, before any dispatch. Any malformed entry - a duplicate
//! handler type or an invalid route path - aborts the scan with a [`ScanError`]
//! so the process never starts serving from a partial table.

mod core;
#[cfg(test)]
mod tests;

pub use core::{HandlerEntry, HandlerScanner, RouteSpec, ScanError, DEFAULT_ROUTE_NAME};
