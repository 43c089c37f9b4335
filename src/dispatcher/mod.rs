//! # Dispatcher Module
//!
//! The dispatcher module executes one request at a time: route lookup, handler
//! construction with constructor injection, action invocation with parameter
//! injection, and error translation.
//!
//! ## Overview
//!
//! The dispatcher owns the immutable route table and factory map produced by the
//! scan phase, plus a shared handle to the service registry. It is stateless
//! across requests: every `execute` call is an independent transaction that
//! either reaches `Done` or terminates at the first failure.
//!
//! ## Request Flow
//!
//! 1. Look up (path, method) in the route table; no match is a
//!    [`DispatchError::RouteNotFound`] (404 at the boundary).
//! 2. Resolve the route's handler factory and construct a fresh handler
//!    instance, injecting its constructor dependencies from the registry.
//! 3. Invoke the matched action, injecting its action parameters the same way.
//!    The handler writes its output to the caller-supplied response writer.
//!
//! Constructor resolution always precedes action resolution, which always
//! precedes invocation. Nothing is retried and nothing is swallowed: every
//! failure propagates as a distinguishable [`DispatchError`] for the boundary
//! layer to present.

mod core;

pub use core::{DispatchError, Dispatcher};
