use std::sync::Arc;

use http::Method;
use tracing::{debug, info, warn};

use crate::aspect::{Action, Aspect};
use crate::error::ConfigError;
use crate::media::MediaType;
use crate::path::{compile_template, split_segments, CompiledPath, PathSegment, PathTypes};
use crate::transform::Reader;

/// Normalize a route path to its canonical textual form.
///
/// The canonical form has a leading `/`, no trailing `/` (except for the
/// root path itself), and no surrounding whitespace. Two registrations that
/// normalize to the same text are the same route.
#[must_use]
pub fn correct_path(path: &str) -> String {
    let trimmed = path.trim();
    let segments = split_segments(trimmed);
    if segments.is_empty() {
        return "/".to_string();
    }
    format!("/{}", segments.join("/"))
}

/// One registered route: a (method, path template) pair bound to an action.
///
/// Built fluently during startup configuration and frozen when the
/// application context snapshots the registry. The compiled segment list is
/// what the matcher walks; the textual path exists for identity, logging,
/// and prefix injection.
pub struct Route {
    method: Method,
    path: String,
    segments: Vec<PathSegment>,
    consumes: Vec<MediaType>,
    produces: Vec<MediaType>,
    aspects: Vec<Arc<dyn Aspect>>,
    action: Arc<dyn Action>,
    /// Readers compatible with this route's `consumes` list, bound at
    /// context build time in registration order.
    readers: Vec<(MediaType, Arc<dyn Reader>)>,
    has_global_path: bool,
}

impl Route {
    pub(crate) fn new(method: Method, path: String, compiled: CompiledPath, action: Arc<dyn Action>) -> Self {
        Self {
            method,
            path,
            segments: compiled.segments,
            consumes: vec![MediaType::wildcard()],
            produces: vec![MediaType::wildcard()],
            aspects: Vec::new(),
            action,
            readers: Vec::new(),
            has_global_path: false,
        }
    }

    /// Replace the accepted request content types. An empty list is ignored
    /// and the route keeps its current (default `*/*`) constraint.
    pub fn consumes(&mut self, types: Vec<MediaType>) -> &mut Self {
        if !types.is_empty() {
            self.consumes = types;
        }
        self
    }

    /// Replace the producible response content types. An empty list is
    /// ignored and the route keeps its current (default `*/*`) constraint.
    pub fn produces(&mut self, types: Vec<MediaType>) -> &mut Self {
        if !types.is_empty() {
            self.produces = types;
        }
        self
    }

    /// Append an aspect to the route's chain. Aspects run in the order they
    /// are declared here.
    pub fn aspect<A>(&mut self, aspect: A) -> &mut Self
    where
        A: Aspect + 'static,
    {
        self.aspects.push(Arc::new(aspect));
        self
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn consumed(&self) -> &[MediaType] {
        &self.consumes
    }

    #[must_use]
    pub fn produced(&self) -> &[MediaType] {
        &self.produces
    }

    #[must_use]
    pub fn aspects(&self) -> &[Arc<dyn Aspect>] {
        &self.aspects
    }

    #[must_use]
    pub fn action(&self) -> &Arc<dyn Action> {
        &self.action
    }

    #[must_use]
    pub(crate) fn readers(&self) -> &[(MediaType, Arc<dyn Reader>)] {
        &self.readers
    }

    /// Prepend the global path segments to this route, exactly once.
    ///
    /// A second call is a configuration mistake (for example the same
    /// registry initialized through two builders); it is logged and
    /// ignored so the route's path is never double-prefixed.
    pub(crate) fn add_global_prefix(&mut self, prefix: &[String]) {
        if self.has_global_path {
            warn!(path = %self.path, "Global path already applied to route, skipping");
            return;
        }
        let mut segments: Vec<PathSegment> =
            prefix.iter().map(|s| PathSegment::Literal(s.clone())).collect();
        segments.append(&mut self.segments);
        self.segments = segments;

        let joined = format!("/{}", prefix.join("/"));
        self.path = if self.path == "/" {
            joined
        } else {
            format!("{}{}", joined, self.path)
        };
        self.has_global_path = true;
    }

    /// Bind the subset of registered readers compatible with this route's
    /// `consumes` list, preserving registration order.
    pub(crate) fn bind_readers(&mut self, registered: &[(MediaType, Arc<dyn Reader>)]) {
        self.readers = registered
            .iter()
            .filter(|(media, _)| self.consumes.iter().any(|c| c.matches(media).is_some()))
            .map(|(media, reader)| (media.clone(), Arc::clone(reader)))
            .collect();
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("consumes", &self.consumes)
            .field("produces", &self.produces)
            .field("aspects", &self.aspects.len())
            .finish()
    }
}

/// Collects route registrations during startup configuration.
///
/// Mutation happens on a single thread before the context is built;
/// initialization (global-prefix injection) runs exactly once. Routes are
/// deduplicated by (method, canonical path): the first registration wins
/// and later ones hand back the existing route.
pub struct RouteRegistry {
    path_types: PathTypes,
    routes: Vec<Route>,
    global_path: Option<String>,
    initialized: bool,
}

impl RouteRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_types(PathTypes::built_in())
    }

    /// Build a registry over a custom path-type table (the built-in types
    /// plus any application-registered ones).
    #[must_use]
    pub fn with_types(path_types: PathTypes) -> Self {
        Self {
            path_types,
            routes: Vec::new(),
            global_path: None,
            initialized: false,
        }
    }

    /// Set the global path prefixed to every route at initialization.
    ///
    /// An empty or root (`/`) path disables prefix injection entirely.
    pub fn set_global_path(&mut self, path: &str) {
        let corrected = correct_path(path);
        if corrected == "/" {
            debug!(path = path, "Global path is empty or root, prefix injection disabled");
            self.global_path = None;
        } else {
            self.global_path = Some(corrected);
        }
    }

    /// Register a route, returning it for fluent follow-up configuration
    /// (`consumes`, `produces`, `aspect`).
    ///
    /// Compilation failures (malformed parameter segments, unknown path
    /// types) abort configuration. A duplicate (method, path) registration
    /// returns the already-registered route; the new action is discarded.
    pub fn route<A>(&mut self, method: Method, path: &str, action: A) -> Result<&mut Route, ConfigError>
    where
        A: Action + 'static,
    {
        let corrected = correct_path(path);
        let compiled = compile_template(&corrected, &self.path_types)?;

        if let Some(idx) = self
            .routes
            .iter()
            .position(|r| r.method == method && r.path == corrected)
        {
            debug!(method = %method, path = %corrected, "Route already registered, keeping first");
            return Ok(&mut self.routes[idx]);
        }

        debug!(method = %method, path = %corrected, "Registered route");
        self.routes
            .push(Route::new(method, corrected, compiled, Arc::new(action)));
        let idx = self.routes.len() - 1;
        Ok(&mut self.routes[idx])
    }

    pub fn get<A>(&mut self, path: &str, action: A) -> Result<&mut Route, ConfigError>
    where
        A: Action + 'static,
    {
        self.route(Method::GET, path, action)
    }

    pub fn post<A>(&mut self, path: &str, action: A) -> Result<&mut Route, ConfigError>
    where
        A: Action + 'static,
    {
        self.route(Method::POST, path, action)
    }

    pub fn put<A>(&mut self, path: &str, action: A) -> Result<&mut Route, ConfigError>
    where
        A: Action + 'static,
    {
        self.route(Method::PUT, path, action)
    }

    pub fn delete<A>(&mut self, path: &str, action: A) -> Result<&mut Route, ConfigError>
    where
        A: Action + 'static,
    {
        self.route(Method::DELETE, path, action)
    }

    /// Apply the global path prefix to every route. Idempotent: a second
    /// call is a no-op.
    pub fn initialize(&mut self) {
        if self.initialized {
            debug!("Route registry already initialized");
            return;
        }
        if let Some(global) = &self.global_path {
            let prefix: Vec<String> = split_segments(global)
                .into_iter()
                .map(String::from)
                .collect();
            for route in &mut self.routes {
                route.add_global_prefix(&prefix);
            }
        }
        self.initialized = true;
        info!(
            routes = self.routes.len(),
            global_path = self.global_path.as_deref().unwrap_or("/"),
            "Route registry initialized"
        );
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn global_path(&self) -> Option<&str> {
        self.global_path.as_deref()
    }

    /// Initialize (if not yet done) and hand the routes to the context
    /// builder.
    pub(crate) fn into_routes(mut self) -> Vec<Route> {
        self.initialize();
        self.routes
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A startup module contributing route registrations.
///
/// Applications split their routes across configurations; the context
/// builder runs each exactly once, in registration order, against a shared
/// registry.
pub trait ControllerConfiguration {
    fn configure(&self, routes: &mut RouteRegistry) -> Result<(), ConfigError>;
}

impl<F> ControllerConfiguration for F
where
    F: Fn(&mut RouteRegistry) -> Result<(), ConfigError>,
{
    fn configure(&self, routes: &mut RouteRegistry) -> Result<(), ConfigError> {
        (self)(routes)
    }
}
