use http::Method;
use tracing::{debug, info, warn};

/// Immutable record binding one (path, method) pair to one handler action.
///
/// Descriptors reference the handler by type name and action name only; the
/// dispatcher resolves those names against its factory map at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Human-facing route name (e.g. `"user_create"`)
    pub name: String,
    /// Exact-match request path (e.g. `"/users/list"`)
    pub path: String,
    /// HTTP method this route answers to
    pub method: Method,
    /// Type name of the handler that owns the action
    pub handler: &'static str,
    /// Name of the handler action to invoke
    pub action: &'static str,
}

/// Append-only table of route descriptors with exact-match lookup.
///
/// Built once during the scan phase, read-only during dispatch. Lookup is a
/// linear scan and the first structural match wins, which makes duplicate
/// (path, method) registrations shadowed rather than ambiguous.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a descriptor to the table.
    ///
    /// No dedup is enforced: a descriptor whose (path, method) pair is already
    /// present is appended anyway, logged at `warn`, and never matched because
    /// [`RouteTable::get_route`] stops at the first match.
    pub fn add_route(&mut self, descriptor: RouteDescriptor) {
        if let Some(existing) = self.get_route(&descriptor.path, &descriptor.method) {
            warn!(
                path = %descriptor.path,
                method = %descriptor.method,
                shadowed = %descriptor.name,
                winner = %existing.name,
                "Duplicate route registration - first registration wins"
            );
        }

        debug!(
            name = %descriptor.name,
            path = %descriptor.path,
            method = %descriptor.method,
            handler = descriptor.handler,
            action = descriptor.action,
            "Route added"
        );

        self.routes.push(descriptor);
    }

    /// Find the first descriptor matching the given path and method exactly.
    ///
    /// Returns `None` when no descriptor matches, which the dispatcher turns
    /// into a route-not-found error (404 at the boundary).
    #[must_use]
    pub fn get_route(&self, path: &str, method: &Method) -> Option<&RouteDescriptor> {
        self.routes
            .iter()
            .find(|route| route.path == path && route.method == *method)
    }

    /// Number of descriptors in the table, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table holds no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over all descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    /// Log a one-line summary of the loaded table.
    ///
    /// Called once after the scan phase so the startup log shows what will be
    /// served.
    pub fn log_summary(&self) {
        let routes_summary: Vec<String> = self
            .routes
            .iter()
            .take(10)
            .map(|route| format!("{} {} -> {}::{}", route.method, route.path, route.handler, route.action))
            .collect();

        info!(
            routes_count = self.routes.len(),
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );
    }

    /// Print all registered routes to stdout.
    ///
    /// Useful for verifying that manifests were scanned as expected.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.routes.len());
        for route in &self.routes {
            println!(
                "[route] {} {} -> {}::{} (name={})",
                route.method, route.path, route.handler, route.action, route.name
            );
        }
    }
}
