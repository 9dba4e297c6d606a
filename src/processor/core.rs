use std::sync::Arc;

use tracing::{debug, error};

use crate::aspect::run_chain;
use crate::context::ApplicationContext;
use crate::error::RequestError;
use crate::media::MediaType;
use crate::model::{HandlerRequest, ResponseModel, RouteRequest, RouteResponse};
use crate::negotiation::{resolve_reader, resolve_writer};
use crate::transform::{JsonWriter, Writer};

/// Serialized error body of last resort, used when the error path itself
/// fails to serialize.
const FALLBACK_ERROR_BODY: &str =
    r#"{"error":{"message":"Internal Server Error","status":500}}"#;

/// Drives one request through the pipeline: match, negotiate, read,
/// intercept, invoke, write.
///
/// `process` never fails; every error becomes a response. Cheap to clone,
/// one per worker thread is the usual arrangement.
#[derive(Clone)]
pub struct RequestProcessor {
    context: Arc<ApplicationContext>,
}

impl RequestProcessor {
    #[must_use]
    pub fn new(context: Arc<ApplicationContext>) -> Self {
        Self { context }
    }

    /// Process one request to completion.
    ///
    /// The negotiated writer (when negotiation got that far) is reused for
    /// the error body, so a client that asked for a specific representation
    /// gets its errors in that representation too.
    pub fn process(&self, req: &RouteRequest) -> RouteResponse {
        let mut negotiated: Option<(MediaType, Arc<dyn Writer>)> = None;
        match self.run(req, &mut negotiated) {
            Ok(response) => response,
            Err(err) => self.handle_error(req, &err, negotiated),
        }
    }

    fn run(
        &self,
        req: &RouteRequest,
        negotiated: &mut Option<(MediaType, Arc<dyn Writer>)>,
    ) -> Result<RouteResponse, RequestError> {
        // Matching
        let matched = self
            .context
            .router()
            .route(&req.method, &req.path)
            .ok_or_else(|| RequestError::NotFound {
                method: req.method.clone(),
                path: req.path.clone(),
            })?;

        // Negotiating: both resolutions run here, before any body bytes
        // are touched. The writer comes first so later failures can be
        // answered in the client's preferred representation; the reader is
        // resolved even for a body-less request, so an unsupported
        // Content-Type is rejected with 415 regardless of body presence.
        let (media, writer) =
            resolve_writer(&matched.route, req.accept(), self.context.writers())?;
        *negotiated = Some((media.clone(), Arc::clone(&writer)));
        let reader = resolve_reader(&matched.route, req.content_type())?;

        // Reading, only when the request carries a body.
        let entity = if req.body.is_empty() {
            None
        } else {
            let value = reader
                .read(&req.body)
                .map_err(|source| RequestError::MalformedBody { source })?;
            Some(value)
        };

        // Intercepting + Invoking
        let handler_req = HandlerRequest {
            method: req.method.clone(),
            path: req.path.clone(),
            params: matched.params,
            headers: req.headers().clone(),
            entity,
        };
        let res = run_chain(
            matched.route.aspects(),
            matched.route.action().as_ref(),
            &handler_req,
        )?;

        // Writing
        write_response(res, &media, writer.as_ref())
    }

    /// Convert a failure into a response. Never fails.
    fn handle_error(
        &self,
        req: &RouteRequest,
        err: &RequestError,
        negotiated: Option<(MediaType, Arc<dyn Writer>)>,
    ) -> RouteResponse {
        let status = err.status();
        if status >= 500 {
            error!(
                method = %req.method,
                path = %req.path,
                class = err.class(),
                error = %err,
                "Request failed"
            );
        } else {
            debug!(
                method = %req.method,
                path = %req.path,
                class = err.class(),
                status = status,
                "Request rejected"
            );
        }

        let res = match self.context.handlers().resolve(err) {
            Some(handler) => {
                let mut res = ResponseModel::with_status(status);
                handler.handle(req, &mut res, err);
                res
            }
            // Unresolved failures get the default mapping and a generic
            // body; internal detail stays in the logs.
            None => ResponseModel::error(status, err.public_message()),
        };

        let (media, writer) = negotiated
            .unwrap_or_else(|| (MediaType::json(), Arc::new(JsonWriter) as Arc<dyn Writer>));
        match write_response(res, &media, writer.as_ref()) {
            Ok(response) => response,
            Err(write_err) => {
                error!(error = %write_err, "Error response serialization failed");
                let mut fallback = RouteResponse {
                    status: 500,
                    headers: std::collections::HashMap::new(),
                    body: FALLBACK_ERROR_BODY.as_bytes().to_vec(),
                };
                fallback
                    .headers
                    .insert("content-type".to_string(), MediaType::json().to_string());
                fallback
            }
        }
    }
}

/// Serialize the response model through the negotiated writer.
///
/// A response without an entity gets an empty body. The Content-Type header
/// is set to the negotiated media type unless the model already set one.
fn write_response(
    mut res: ResponseModel,
    media: &MediaType,
    writer: &dyn Writer,
) -> Result<RouteResponse, RequestError> {
    let body = match &res.entity {
        Some(entity) => writer
            .write(entity)
            .map_err(|source| RequestError::Serialization { source })?,
        None => Vec::new(),
    };
    let status = res.status;
    let mut headers = res.take_headers();
    if !body.is_empty() && !headers.contains_key("content-type") {
        headers.insert("content-type".to_string(), media.to_string());
    }
    Ok(RouteResponse {
        status,
        headers,
        body,
    })
}
