//! Application assembly: the builder and the immutable context it produces.
//!
//! All configuration — routes, path types, readers and writers, exception
//! handlers, the global path — flows through [`ContextBuilder`] on a single
//! thread at startup. `build` consumes the builder and freezes everything
//! into an [`ApplicationContext`], which is shared read-only (typically
//! behind an `Arc`) with the transport's workers for the life of the
//! process.

mod core;

pub use core::{ApplicationContext, ContextBuilder};
