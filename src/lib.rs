//! # restroute
//!
//! **restroute** is the request-routing and dispatch core of a server-side
//! REST framework: typed path templates, media-type content negotiation,
//! around-interceptors (aspects), class-based exception handling, and a
//! per-request processing pipeline — with no transport of its own. A
//! transport adapter hands in a [`RouteRequest`](model::RouteRequest) and
//! gets back a [`RouteResponse`](model::RouteResponse); everything in
//! between is this crate.
//!
//! ## Architecture
//!
//! The library is organized leaf-first:
//!
//! - **[`media`]** - media types with wildcards, Accept-header parsing,
//!   specificity-ranked compatibility
//! - **[`path`]** - `$name:Type` path-template compiler and the path-type
//!   table (`String`, `Integer`, `Long`, plus application types)
//! - **[`routing`]** - route records, the registration DSL, and the
//!   route registry with global-path injection
//! - **[`router`]** - the request matcher over the frozen route set
//! - **[`negotiation`]** - reader and writer resolution
//! - **[`transform`]** - the `Reader`/`Writer` serialization contract and
//!   the default JSON pair
//! - **[`aspect`]** - before/after interceptor chains around actions
//! - **[`exception`]** - failure-class → handler resolution
//! - **[`context`]** - the startup builder and the immutable application
//!   context it freezes
//! - **[`processor`]** - the per-request pipeline
//! - **[`model`]** - transport-facing and in-flight request/response types
//! - **[`error`]** - the configuration and per-request error taxonomy
//!
//! ## Concurrency model
//!
//! The core starts no threads and takes no locks. All serving-time state is
//! built once, frozen inside an [`ApplicationContext`], and shared across
//! worker threads behind an `Arc`; per-request state lives on the caller's
//! stack.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//!
//! use restroute::context::ContextBuilder;
//! use restroute::model::{HandlerRequest, ResponseModel, RouteRequest};
//! use restroute::processor::RequestProcessor;
//! use restroute::routing::RouteRegistry;
//! use serde_json::json;
//!
//! let context = ContextBuilder::new()
//!     .global_path("/api")
//!     .controller(|routes: &mut RouteRegistry| {
//!         routes.get("/orders/$id:Integer", |req: &HandlerRequest, res: &mut ResponseModel| {
//!             let id = req.param("id").and_then(|v| v.as_i32()).unwrap_or(0);
//!             res.entity = Some(json!({ "id": id }));
//!             Ok(())
//!         })?;
//!         Ok(())
//!     })
//!     .build()?;
//!
//! let processor = RequestProcessor::new(Arc::new(context));
//! let response = processor.process(&RouteRequest::new(http::Method::GET, "/api/orders/42"));
//! assert_eq!(response.status, 200);
//! # Ok::<(), restroute::error::ConfigError>(())
//! ```

pub mod aspect;
pub mod context;
pub mod error;
pub mod exception;
pub mod media;
pub mod model;
pub mod negotiation;
pub mod path;
pub mod processor;
pub mod router;
pub mod routing;
pub mod transform;

pub use context::{ApplicationContext, ContextBuilder};
pub use processor::RequestProcessor;
