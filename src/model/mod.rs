//! Request and response models.
//!
//! Two layers exist:
//!
//! - the transport boundary: [`RouteRequest`] in, [`RouteResponse`] out —
//!   method, path, a lowercase header map, and body bytes. The surrounding
//!   transport owns socket I/O and wire parsing; this core never sees a raw
//!   connection.
//! - the in-flight layer: [`HandlerRequest`] (typed path params plus the
//!   deserialized entity) and [`ResponseModel`] (status, headers, entity)
//!   seen by aspects, actions, and exception handlers.

mod request;
mod response;

pub use request::{HandlerRequest, ParamVec, RouteRequest, MAX_INLINE_PARAMS};
pub use response::{ResponseModel, RouteResponse};
