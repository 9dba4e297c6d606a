//! Media types and Accept-header negotiation primitives.
//!
//! A [`MediaType`] is a `(type, subtype)` pair where either side may be the
//! `*` wildcard. Compatibility between two media types is ranked by
//! [`Specificity`]: an exact pairing always beats a subtype wildcard, which
//! beats a full wildcard. The content negotiator relies on that ordering to
//! prefer concrete readers and writers over catch-all registrations.

mod core;
#[cfg(test)]
mod tests;

pub use core::{parse_accept, AcceptEntry, MediaType, Specificity};
