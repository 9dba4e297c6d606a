//! Aspects: around-interceptors wrapping route action execution.
//!
//! An [`Aspect`] exposes two hook points, `before` and `after`, around the
//! wrapped [`Action`]. The chain is executed by an explicit loop over the
//! route's declared aspects — no nested closure wrapping — with an explicit
//! short-circuit: a `before` hook that returns a response skips the action
//! and every subsequent aspect.

mod core;

pub use core::{run_chain, Action, Aspect};
