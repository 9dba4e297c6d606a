//! Exception-to-handler mapping.
//!
//! Handlers are registered per failure class. Resolution tries the thrown
//! failure's exact class first, then walks its declared ancestor list in
//! order — an explicit, reflection-free stand-in for superclass lookup.
//! Framework condition classes (`RouteNotFound`, `UnsupportedMediaType`,
//! `NotAcceptable`, `MalformedRequestBody`, `SerializationFailure`) are
//! registrable like any domain class. Unresolved failures fall back to the
//! processor's fixed default status mapping.

mod core;

pub use core::{ExceptionConfiguration, ExceptionHandler, ExceptionHandlerTable};
