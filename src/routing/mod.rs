//! Route records and the route registry.
//!
//! A [`Route`] binds one (HTTP method, path template) pair to an action,
//! with content-type constraints and an ordered aspect list. Routes are
//! registered on a [`RouteRegistry`] during single-threaded startup
//! configuration, optionally under a registry-wide global path prefix, and
//! frozen when the application context is built. Nothing here mutates after
//! the one-time initialization.

mod core;

pub use core::{correct_path, ControllerConfiguration, Route, RouteRegistry};
