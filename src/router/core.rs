use std::sync::Arc;

use http::Method;
use tracing::debug;

use crate::model::ParamVec;
use crate::path::{split_segments, PathSegment};
use crate::routing::Route;

/// A successful match: the winning route plus the parameters extracted
/// while walking it, in path order.
pub struct RouteMatch {
    pub route: Arc<Route>,
    pub params: ParamVec,
}

/// Read-only matcher over the frozen route set.
///
/// Shared via the application context across however many worker threads
/// the transport runs; matching never mutates, so no synchronization is
/// needed.
pub struct Router {
    routes: Vec<Arc<Route>>,
}

impl Router {
    pub(crate) fn new(routes: Vec<Arc<Route>>) -> Self {
        Self { routes }
    }

    #[must_use]
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Match a request against the route set.
    ///
    /// Candidates are tried in registration order; the first whose segment
    /// list fully matches wins. A parameter segment matches only when the
    /// raw text converts under its path type, so typed routes never capture
    /// out-of-domain segments.
    #[must_use]
    pub fn route(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        let request_segments = split_segments(path);

        for route in &self.routes {
            if route.method() != method {
                continue;
            }
            if route.segments().len() != request_segments.len() {
                continue;
            }
            if let Some(params) = match_segments(route.segments(), &request_segments) {
                debug!(
                    method = %method,
                    path = path,
                    route = route.path(),
                    params = params.len(),
                    "Route matched"
                );
                return Some(RouteMatch {
                    route: Arc::clone(route),
                    params,
                });
            }
        }

        debug!(method = %method, path = path, "No route matched");
        None
    }
}

/// Walk a route's compiled segments against the request segments.
///
/// Lengths are already known equal. Returns the extracted parameters, or
/// `None` on the first literal mismatch or failed parameter conversion.
fn match_segments(compiled: &[PathSegment], request: &[&str]) -> Option<ParamVec> {
    let mut params = ParamVec::new();
    for (segment, raw) in compiled.iter().zip(request) {
        match segment {
            PathSegment::Literal(text) => {
                if text != raw {
                    return None;
                }
            }
            PathSegment::Param { name, path_type } => {
                let value = path_type.parse(raw)?;
                params.push((name.clone(), value));
            }
        }
    }
    Some(params)
}
