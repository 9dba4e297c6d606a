//! The per-request pipeline.
//!
//! One request flows through matching, content negotiation, body reading,
//! the aspect chain around the action, and entity writing. A failure at
//! any stage diverts into error handling, which consults the exception
//! handler table and always produces a response; the transport adapter
//! never sees an error value. The processor holds only an `Arc` to the
//! frozen context, so one instance (or a clone per worker) serves
//! arbitrarily many concurrent callers.

mod core;

pub use core::RequestProcessor;
