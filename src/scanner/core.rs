use crate::handlers::HandlerFactory;
use crate::router::{RouteDescriptor, RouteTable};
use http::Method;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, error, info};

/// Default human-facing name for routes that do not set one.
pub const DEFAULT_ROUTE_NAME: &str = "default_route";

/// One route declaration in a handler's manifest.
///
/// This is the annotation surface: `path` and `action` are required, everything
/// else has a default (`name = "default_route"`, `method = GET`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    /// Exact-match request path, must start with `/`
    pub path: &'static str,
    /// Human-facing route name
    pub name: &'static str,
    /// HTTP method the route answers to
    pub method: Method,
    /// Handler action the route invokes
    pub action: &'static str,
}

impl RouteSpec {
    /// Declare a route for `path` invoking `action`, with default name and
    /// method.
    #[must_use]
    pub fn new(path: &'static str, action: &'static str) -> Self {
        Self {
            path,
            name: DEFAULT_ROUTE_NAME,
            method: Method::GET,
            action,
        }
    }

    /// Override the route name.
    #[must_use]
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Override the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }
}

/// A candidate handler type presented to the scan phase.
///
/// Manifest and factory are plain `fn` pointers: everything a handler exposes to
/// the framework is declared statically, so the scan has no instances to build
/// and nothing to reflect over.
#[derive(Clone)]
pub struct HandlerEntry {
    /// Handler type name; keys the factory map and appears in descriptors
    pub type_name: &'static str,
    /// Yields the handler's route declarations
    pub manifest: fn() -> Vec<RouteSpec>,
    /// Constructs the handler with its dependencies injected
    pub factory: HandlerFactory,
}

impl fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Error aborting the scan phase.
///
/// All variants are fatal at startup: the process must not begin serving
/// requests with an incomplete route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Two entries share the same handler type name.
    ///
    /// The factory map is keyed by type name, so a duplicate would silently
    /// replace the earlier handler's factory.
    DuplicateHandler {
        /// The type name registered twice
        type_name: &'static str,
    },
    /// A manifest declared a path that is empty or does not start with `/`.
    InvalidRoutePath {
        /// Handler whose manifest is malformed
        type_name: &'static str,
        /// The offending path
        path: String,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::DuplicateHandler { type_name } => {
                write!(f, "handler type {type_name} registered more than once")
            }
            ScanError::InvalidRoutePath { type_name, path } => {
                write!(
                    f,
                    "handler {type_name} declares invalid route path {path:?} (must start with '/')"
                )
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// Walks the registered handler entries and builds the dispatch inputs.
#[derive(Debug, Default)]
pub struct HandlerScanner {
    entries: Vec<HandlerEntry>,
}

impl HandlerScanner {
    /// Create a scanner with no entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a handler entry. Entries are scanned in registration order.
    pub fn register(&mut self, entry: HandlerEntry) {
        debug!(handler = entry.type_name, "Handler entry registered");
        self.entries.push(entry);
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run the scan: validate every entry, expand every manifest into route
    /// descriptors, and return the route table plus the factory map.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScanError`] encountered. Nothing partial is
    /// returned; a failed scan leaves the caller with no table to serve.
    pub fn scan(&self) -> Result<(RouteTable, HashMap<&'static str, HandlerFactory>), ScanError> {
        let mut table = RouteTable::new();
        let mut factories: HashMap<&'static str, HandlerFactory> = HashMap::new();

        for entry in &self.entries {
            if factories.contains_key(entry.type_name) {
                error!(handler = entry.type_name, "Duplicate handler type in scan");
                return Err(ScanError::DuplicateHandler {
                    type_name: entry.type_name,
                });
            }
            factories.insert(entry.type_name, entry.factory);

            for spec in (entry.manifest)() {
                if !spec.path.starts_with('/') {
                    error!(
                        handler = entry.type_name,
                        path = spec.path,
                        "Invalid route path in manifest"
                    );
                    return Err(ScanError::InvalidRoutePath {
                        type_name: entry.type_name,
                        path: spec.path.to_string(),
                    });
                }

                table.add_route(RouteDescriptor {
                    name: spec.name.to_string(),
                    path: spec.path.to_string(),
                    method: spec.method,
                    handler: entry.type_name,
                    action: spec.action,
                });
            }
        }

        info!(
            handlers = factories.len(),
            routes = table.len(),
            "Handler scan complete"
        );

        Ok((table, factories))
    }
}
