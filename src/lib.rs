//! # routier
//!
//! **routier** is a minimal, container-driven request dispatcher for Rust. Handler
//! types declare their HTTP routes through a per-handler manifest, a one-time scan
//! phase turns those manifests into an exact-match route table, and each incoming
//! (path, method) pair is resolved to a freshly constructed handler whose
//! dependencies are supplied from a process-wide service registry.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`registry`]** - Typed singleton service registry (the DI container)
//! - **[`scanner`]** - Startup scan of handler manifests into a route table
//! - **[`router`]** - Route descriptors and exact-match (path, method) lookup
//! - **[`resolver`]** - Per-invocation parameter resolution against the registry
//! - **[`dispatcher`]** - Per-request handler construction and action invocation
//! - **[`server`]** - Response buffer and HTTP status/body mapping at the boundary
//! - **[`services`]** - Collaborator seams: template rendering and persistence
//! - **[`handlers`]** - The `Handler` trait plus the bundled demo handlers
//!
//! ## Request Lifecycle
//!
//! 1. **Startup**: services are registered once into a [`ServiceRegistry`], every
//!    handler's [`HandlerEntry`] is handed to a [`HandlerScanner`], and `scan()`
//!    produces the immutable [`RouteTable`] and factory map. Any scan failure
//!    aborts startup; the process never serves with a partial table.
//! 2. **Dispatch**: [`Dispatcher::execute`] looks up the route, constructs the
//!    handler through its factory (constructor injection), then invokes the
//!    matched action (action-parameter injection). The handler writes its output
//!    to a [`ResponseWriter`]; the dispatcher only reports success or failure.
//!
//! Both the registry and the table are written only during startup, so concurrent
//! dispatch reads them without locking. Handlers are built fresh per request and
//! never shared.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use http::Method;
//! use routier::handlers::{IndexHandler, UserHandler};
//! use routier::services::{InMemoryUserStore, MiniJinjaRenderer, TemplateEngine, UserStore};
//! use routier::{respond, Dispatcher, HandlerScanner, ServiceRegistry};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut renderer = MiniJinjaRenderer::new();
//! renderer.add_template("home.html", "<h1>Home</h1>")?;
//!
//! let mut registry = ServiceRegistry::new();
//! registry.register::<Arc<dyn TemplateEngine>>(Arc::new(renderer))?;
//! registry.register::<Arc<dyn UserStore>>(Arc::new(InMemoryUserStore::new()))?;
//!
//! let mut scanner = HandlerScanner::new();
//! scanner.register(IndexHandler::entry());
//! scanner.register(UserHandler::entry());
//! let (table, factories) = scanner.scan()?;
//!
//! let dispatcher = Dispatcher::new(table, factories, Arc::new(registry));
//! let (status, body) = respond(&dispatcher, "/", &Method::GET);
//! assert_eq!(status, 200);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Notes
//!
//! - Resolution is purely type-based: a dependency is looked up by its Rust type,
//!   checked at compile time at the call site. A missing required service is a
//!   hard dispatch error, never a silent `None`.
//! - Duplicate (path, method) registrations are allowed but shadowed: the first
//!   registration wins and the duplicate is logged at `warn`.
//! - The dispatch path is fully synchronous. An async host can wrap `execute`
//!   without changing its resolve-then-invoke ordering.

pub mod dispatcher;
pub mod handlers;
pub mod registry;
pub mod resolver;
pub mod router;
pub mod scanner;
pub mod server;
pub mod services;

pub use dispatcher::{DispatchError, Dispatcher};
pub use handlers::{Handler, HandlerFactory};
pub use registry::{RegistryError, ServiceRegistry};
pub use resolver::ParameterResolver;
pub use router::{RouteDescriptor, RouteTable};
pub use scanner::{HandlerEntry, HandlerScanner, RouteSpec, ScanError};
pub use server::{respond, ResponseWriter};
