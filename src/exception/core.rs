use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::RequestError;
use crate::model::{ResponseModel, RouteRequest};

/// Turns a thrown failure plus the in-flight request into a final response
/// by mutating the response model (status, headers, entity).
pub trait ExceptionHandler: Send + Sync {
    fn handle(&self, req: &RouteRequest, res: &mut ResponseModel, err: &RequestError);
}

impl<F> ExceptionHandler for F
where
    F: Fn(&RouteRequest, &mut ResponseModel, &RequestError) + Send + Sync,
{
    fn handle(&self, req: &RouteRequest, res: &mut ResponseModel, err: &RequestError) {
        (self)(req, res, err)
    }
}

/// Failure-class → handler table.
///
/// Populated during startup and frozen inside the application context;
/// lookups during serving are read-only and safe under arbitrary
/// concurrency. Later registrations for the same class overwrite earlier
/// ones.
#[derive(Default)]
pub struct ExceptionHandlerTable {
    handlers: HashMap<&'static str, Arc<dyn ExceptionHandler>>,
}

impl ExceptionHandlerTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a failure class. A second registration for
    /// the same class replaces the first.
    pub fn on<H>(&mut self, class: &'static str, handler: H)
    where
        H: ExceptionHandler + 'static,
    {
        if self.handlers.insert(class, Arc::new(handler)).is_some() {
            debug!(class = class, "Replaced exception handler registration");
        }
    }

    /// Resolve the most specific handler for a failure: exact class first,
    /// then each declared ancestor in order.
    #[must_use]
    pub fn resolve(&self, err: &RequestError) -> Option<Arc<dyn ExceptionHandler>> {
        for class in err.class_chain() {
            if let Some(handler) = self.handlers.get(class) {
                debug!(
                    thrown_class = err.class(),
                    resolved_class = class,
                    "Exception handler resolved"
                );
                return Some(Arc::clone(handler));
            }
        }
        None
    }

    /// Merge another table into this one; the other table's registrations
    /// win on conflict (later-configuration-wins semantics).
    pub fn merge(&mut self, other: ExceptionHandlerTable) {
        for (class, handler) in other.handlers {
            if self.handlers.insert(class, handler).is_some() {
                debug!(class = class, "Replaced exception handler registration");
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// A startup module contributing exception-handler bindings.
///
/// The context builder runs `configure` exactly once per registered
/// configuration, which is what makes initialization one-shot; repeated
/// `build` calls are impossible because the builder is consumed.
pub trait ExceptionConfiguration {
    fn configure(&self, handlers: &mut ExceptionHandlerTable);
}

impl<F> ExceptionConfiguration for F
where
    F: Fn(&mut ExceptionHandlerTable),
{
    fn configure(&self, handlers: &mut ExceptionHandlerTable) {
        (self)(handlers)
    }
}
