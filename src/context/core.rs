use std::sync::Arc;

use tracing::info;

use crate::error::ConfigError;
use crate::exception::{ExceptionConfiguration, ExceptionHandlerTable};
use crate::media::MediaType;
use crate::path::{PathType, PathTypes};
use crate::router::Router;
use crate::routing::{ControllerConfiguration, RouteRegistry};
use crate::transform::{JsonReader, JsonWriter, Reader, Writer};

/// The frozen application state shared across worker threads.
///
/// Everything here is read-only after `build`; sharing an
/// `Arc<ApplicationContext>` between however many workers the transport
/// runs requires no locking.
pub struct ApplicationContext {
    router: Router,
    handlers: ExceptionHandlerTable,
    writers: Vec<(MediaType, Arc<dyn Writer>)>,
    global_path: Option<String>,
}

impl ApplicationContext {
    /// Start building a context.
    #[must_use]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn handlers(&self) -> &ExceptionHandlerTable {
        &self.handlers
    }

    #[must_use]
    pub fn writers(&self) -> &[(MediaType, Arc<dyn Writer>)] {
        &self.writers
    }

    #[must_use]
    pub fn global_path(&self) -> Option<&str> {
        self.global_path.as_deref()
    }
}

/// Single-threaded startup configuration collector.
///
/// Consuming `build` is what makes initialization one-shot: configurations
/// run exactly once and the builder cannot be reused afterwards. The JSON
/// reader and writer are pre-registered; applications add further
/// transformers per content type.
pub struct ContextBuilder {
    path_types: PathTypes,
    global_path: Option<String>,
    controllers: Vec<Box<dyn ControllerConfiguration>>,
    exception_configs: Vec<Box<dyn ExceptionConfiguration>>,
    readers: Vec<(MediaType, Arc<dyn Reader>)>,
    writers: Vec<(MediaType, Arc<dyn Writer>)>,
}

impl ContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            path_types: PathTypes::built_in(),
            global_path: None,
            controllers: Vec::new(),
            exception_configs: Vec::new(),
            readers: vec![(MediaType::json(), Arc::new(JsonReader))],
            writers: vec![(MediaType::json(), Arc::new(JsonWriter))],
        }
    }

    /// Register an application path type, available to every route template
    /// compiled during `build`. Re-registering a built-in name replaces it.
    #[must_use]
    pub fn path_type(mut self, path_type: PathType) -> Self {
        self.path_types.register(path_type);
        self
    }

    /// Set the global path prefixed to every route. Empty or `/` disables
    /// prefixing.
    #[must_use]
    pub fn global_path(mut self, path: &str) -> Self {
        self.global_path = Some(path.to_string());
        self
    }

    /// Add a controller configuration. Configurations run at `build` in the
    /// order added; the first registration of a (method, path) pair wins
    /// across all of them.
    #[must_use]
    pub fn controller<C>(mut self, controller: C) -> Self
    where
        C: ControllerConfiguration + 'static,
    {
        self.controllers.push(Box::new(controller));
        self
    }

    /// Add an exception configuration. Configurations run at `build` in the
    /// order added; later registrations for a failure class win.
    #[must_use]
    pub fn exceptions<E>(mut self, config: E) -> Self
    where
        E: ExceptionConfiguration + 'static,
    {
        self.exception_configs.push(Box::new(config));
        self
    }

    /// Register a body reader under its own media type.
    #[must_use]
    pub fn register_reader<R>(mut self, reader: R) -> Self
    where
        R: Reader + 'static,
    {
        self.readers.push((reader.media_type(), Arc::new(reader)));
        self
    }

    /// Register an entity writer under its own media type.
    #[must_use]
    pub fn register_writer<W>(mut self, writer: W) -> Self
    where
        W: Writer + 'static,
    {
        self.writers.push((writer.media_type(), Arc::new(writer)));
        self
    }

    /// Run every configuration and freeze the result.
    ///
    /// Route registration happens here, so template compilation errors from
    /// any controller configuration surface as the build error. Each route
    /// gets the subset of registered readers compatible with its `consumes`
    /// list bound to it, which keeps per-request reader resolution a walk
    /// over a short pre-filtered list.
    pub fn build(self) -> Result<ApplicationContext, ConfigError> {
        let mut registry = RouteRegistry::with_types(self.path_types);
        if let Some(global) = &self.global_path {
            registry.set_global_path(global);
        }
        for controller in &self.controllers {
            controller.configure(&mut registry)?;
        }
        let global_path = registry.global_path().map(str::to_string);

        let mut routes = registry.into_routes();
        for route in &mut routes {
            route.bind_readers(&self.readers);
        }

        let mut handlers = ExceptionHandlerTable::new();
        for config in &self.exception_configs {
            config.configure(&mut handlers);
        }

        info!(
            routes = routes.len(),
            handlers = handlers.len(),
            readers = self.readers.len(),
            writers = self.writers.len(),
            "Application context built"
        );

        Ok(ApplicationContext {
            router: Router::new(routes.into_iter().map(Arc::new).collect()),
            handlers,
            writers: self.writers,
            global_path,
        })
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
