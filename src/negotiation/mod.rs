//! Content negotiation: picking a reader for the request body and a writer
//! for the response entity.
//!
//! Both sides rank compatible candidates by pairing specificity (exact
//! beats subtype-wildcard beats full-wildcard) and break ties by
//! registration order, so resolution is deterministic for any fixed
//! configuration. A missing Content-Type negotiates as `*/*`; a missing
//! Accept header accepts anything at full quality.

mod core;
#[cfg(test)]
mod tests;

pub use core::{resolve_reader, resolve_writer};
