//! # Service Registry Module
//!
//! The registry module provides the process-wide dependency-injection container.
//! Services are registered exactly once during startup and resolved by their Rust
//! type for the lifetime of the process.
//!
//! ## Overview
//!
//! The registry is responsible for:
//! - Holding one singleton handle per service type
//! - Rejecting duplicate registrations (a configuration error, fatal at startup)
//! - Resolving a service by type, failing loudly when it is absent
//!
//! ## Lifecycle
//!
//! The registry follows a strict two-phase lifecycle:
//!
//! 1. **Population**: the bootstrap code registers every service before any
//!    dispatch begins. Registration requires `&mut self`, so the borrow checker
//!    enforces that no reader exists yet.
//! 2. **Read-only**: the populated registry is wrapped in an `Arc` and shared
//!    with the dispatcher. All access from this point is `&self` lookups, so
//!    concurrent dispatch needs no locking.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use routier::registry::ServiceRegistry;
//!
//! struct Database {
//!     url: String,
//! }
//!
//! # fn main() -> Result<(), routier::registry::RegistryError> {
//! let mut registry = ServiceRegistry::new();
//! registry.register(Arc::new(Database { url: "postgres://localhost".into() }))?;
//!
//! let db: Arc<Database> = registry.resolve()?;
//! assert_eq!(db.url, "postgres://localhost");
//! # Ok(())
//! # }
//! ```

mod core;
#[cfg(test)]
mod tests;

pub use core::{RegistryError, ServiceRegistry};
