//! Error taxonomy for the routing core.
//!
//! Two families exist and never mix:
//!
//! - [`ConfigError`] — startup-time configuration failures (malformed route
//!   template, unknown path-parameter type). These are fatal: a server must
//!   not start accepting traffic with a broken routing table.
//! - [`RequestError`] — per-request failures. These are always caught at the
//!   [`RequestProcessor`](crate::processor::RequestProcessor) boundary and
//!   converted into a response; they never escape to the transport layer.
//!
//! User actions and aspects raise domain failures through the [`Failure`]
//! trait, which carries an explicit class name plus an ordered ancestor list
//! so the exception resolver can walk "superclass" relationships without any
//! runtime reflection.

use std::fmt;

use http::Method;

/// A domain failure raised by a user action or aspect.
///
/// Instead of relying on runtime type hierarchies, a failure names its own
/// class and, optionally, an ordered list of ancestor classes. The exception
/// resolver tries the exact class first, then each ancestor in order, so a
/// handler registered for a base class still catches more specific failures.
///
/// ```
/// use restroute::error::Failure;
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct OutOfStock;
///
/// impl fmt::Display for OutOfStock {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "item out of stock")
///     }
/// }
///
/// impl std::error::Error for OutOfStock {}
///
/// impl Failure for OutOfStock {
///     fn class(&self) -> &'static str {
///         "OutOfStock"
///     }
///     fn ancestors(&self) -> &'static [&'static str] {
///         &["OrderError"]
///     }
/// }
/// ```
pub trait Failure: std::error::Error + Send + Sync + 'static {
    /// The class name used for exact handler lookup.
    fn class(&self) -> &'static str;

    /// Ancestor classes, nearest first. Tried in order when no exact handler
    /// is registered. The root is never implied; only listed ancestors match.
    fn ancestors(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Startup-time route configuration failure. Fatal by design: callers must
/// abort startup rather than serve with a partial routing table.
#[derive(Debug)]
pub enum ConfigError {
    /// The route template is syntactically malformed (empty parameter name,
    /// more than one `:` in a parameter segment).
    InvalidRoutePath { path: String },
    /// A parameter segment names a type that is not present in the
    /// [`PathTypes`](crate::path::PathTypes) table.
    UnknownPathType { path: String, type_name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRoutePath { path } => {
                write!(f, "invalid configuration of the route '{}'", path)
            }
            ConfigError::UnknownPathType { path, type_name } => {
                write!(
                    f,
                    "unknown path type '{}' in the route '{}'",
                    type_name, path
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A per-request failure, produced at any stage of the processing pipeline.
///
/// Every variant maps to a default HTTP status and a registrable class name,
/// so users may install handlers for the framework's own conditions as well
/// as for their domain failures.
#[derive(Debug)]
pub enum RequestError {
    /// No route matched the request method and path.
    NotFound { method: Method, path: String },
    /// The request's Content-Type is not compatible with any reader bound to
    /// the matched route.
    UnsupportedMediaType { content_type: Option<String> },
    /// No Accept entry could be paired with a produces entry and a
    /// registered writer.
    NotAcceptable,
    /// The resolved reader rejected the request body.
    MalformedBody { source: anyhow::Error },
    /// The user action or an aspect raised a domain failure.
    Action(Box<dyn Failure>),
    /// The resolved writer failed to serialize the response entity.
    Serialization { source: anyhow::Error },
}

impl RequestError {
    /// Default status-code mapping applied when no handler is resolved.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            RequestError::NotFound { .. } => 404,
            RequestError::UnsupportedMediaType { .. } => 415,
            RequestError::NotAcceptable => 406,
            RequestError::MalformedBody { .. } => 400,
            RequestError::Action(_) | RequestError::Serialization { .. } => 500,
        }
    }

    /// The class name used for handler lookup. Framework conditions expose
    /// fixed names; action failures delegate to the wrapped [`Failure`].
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            RequestError::NotFound { .. } => "RouteNotFound",
            RequestError::UnsupportedMediaType { .. } => "UnsupportedMediaType",
            RequestError::NotAcceptable => "NotAcceptable",
            RequestError::MalformedBody { .. } => "MalformedRequestBody",
            RequestError::Action(failure) => failure.class(),
            RequestError::Serialization { .. } => "SerializationFailure",
        }
    }

    /// Lookup chain for the exception resolver: the exact class first, then
    /// each ancestor in declaration order.
    #[must_use]
    pub fn class_chain(&self) -> Vec<&'static str> {
        let mut chain = vec![self.class()];
        if let RequestError::Action(failure) = self {
            chain.extend_from_slice(failure.ancestors());
        }
        chain
    }

    /// Message safe to expose in a response body. Server-side failures get a
    /// generic phrase; internal diagnostic detail stays in the logs.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            RequestError::NotFound { .. } => "Not Found",
            RequestError::UnsupportedMediaType { .. } => "Unsupported Media Type",
            RequestError::NotAcceptable => "Not Acceptable",
            RequestError::MalformedBody { .. } => "Bad Request",
            RequestError::Action(_) | RequestError::Serialization { .. } => {
                "Internal Server Error"
            }
        }
    }
}

// Display carries the internal detail for logging; responses use
// `public_message` instead.
impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NotFound { method, path } => {
                write!(f, "no route matched {} {}", method, path)
            }
            RequestError::UnsupportedMediaType { content_type } => match content_type {
                Some(ct) => write!(f, "unsupported media type '{}'", ct),
                None => write!(f, "unsupported media type"),
            },
            RequestError::NotAcceptable => write!(f, "no acceptable representation"),
            RequestError::MalformedBody { source } => {
                write!(f, "malformed request body: {}", source)
            }
            RequestError::Action(failure) => write!(f, "action failure: {}", failure),
            RequestError::Serialization { source } => {
                write!(f, "response serialization failed: {}", source)
            }
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::MalformedBody { source }
            | RequestError::Serialization { source } => Some(source.as_ref()),
            RequestError::Action(failure) => Some(failure.as_ref() as &dyn std::error::Error),
            _ => None,
        }
    }
}
