//! # Server Boundary Module
//!
//! The thin seam between the dispatch engine and whatever HTTP host embeds it.
//!
//! Transport is out of scope for this crate: the host parses the raw request and
//! hands over an already-extracted (path, method) pair. This module owns the two
//! things that are still wire-facing:
//!
//! - [`ResponseWriter`] - the response channel a handler writes its status and
//!   body into
//! - [`respond`] - the error-to-HTTP mapping: a missing route becomes a 404
//!   carrying the requested path, every other dispatch failure becomes a 500,
//!   both with a JSON error body

mod response;

pub use response::{respond, status_reason, ResponseWriter};
