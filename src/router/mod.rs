//! Request-path matching over the frozen route set.
//!
//! The matcher walks each candidate route's compiled segments against the
//! request path, converting parameter segments through their path types as
//! it goes. A conversion failure disqualifies the candidate rather than
//! failing the request, so `/items/abc` falls through a
//! `/items/$id:Integer` route to any later candidate. Candidates are tried
//! in registration order; the first full match wins.

mod core;
#[cfg(test)]
mod tests;

pub use core::{RouteMatch, Router};
