use std::sync::Arc;

use tracing::debug;

use crate::error::{Failure, RequestError};
use crate::model::{HandlerRequest, ResponseModel};

/// The user action bound to a route: reads the handler request, mutates the
/// response model, and may raise a domain [`Failure`].
pub trait Action: Send + Sync {
    fn invoke(&self, req: &HandlerRequest, res: &mut ResponseModel)
        -> Result<(), Box<dyn Failure>>;
}

impl<F> Action for F
where
    F: Fn(&HandlerRequest, &mut ResponseModel) -> Result<(), Box<dyn Failure>> + Send + Sync,
{
    fn invoke(
        &self,
        req: &HandlerRequest,
        res: &mut ResponseModel,
    ) -> Result<(), Box<dyn Failure>> {
        (self)(req, res)
    }
}

/// An around-interceptor declared on a route.
///
/// Both hooks default to no-ops so implementations override only the side
/// they care about. A `before` hook may short-circuit the chain by
/// returning a response directly.
pub trait Aspect: Send + Sync {
    /// Runs before the action, in declaration order. Returning `Some`
    /// short-circuits: the action and all subsequent aspects are skipped
    /// and the returned response becomes final.
    fn before(&self, _req: &HandlerRequest) -> Option<ResponseModel> {
        None
    }

    /// Runs after the action, in declaration order, and may mutate the
    /// response.
    fn after(&self, _req: &HandlerRequest, _res: &mut ResponseModel) {}
}

/// Execute the aspect chain around an action.
///
/// Before-hooks run in declaration order. If none short-circuits, the
/// action runs against a fresh response model. After-hooks then run in the
/// same declaration order, but only for aspects whose before-hook actually
/// executed (on a short-circuit that includes the short-circuiting aspect
/// itself). An action failure skips the after-hooks entirely and
/// propagates to error handling.
pub fn run_chain(
    aspects: &[Arc<dyn Aspect>],
    action: &dyn Action,
    req: &HandlerRequest,
) -> Result<ResponseModel, RequestError> {
    let mut executed = 0;
    let mut short_circuit: Option<ResponseModel> = None;

    for (idx, aspect) in aspects.iter().enumerate() {
        executed = idx + 1;
        if let Some(res) = aspect.before(req) {
            debug!(
                aspect_index = idx,
                status = res.status,
                "Aspect short-circuited the chain"
            );
            short_circuit = Some(res);
            break;
        }
    }

    let mut res = match short_circuit {
        Some(res) => res,
        None => {
            let mut res = ResponseModel::new();
            action.invoke(req, &mut res).map_err(RequestError::Action)?;
            res
        }
    };

    for aspect in &aspects[..executed] {
        aspect.after(req, &mut res);
    }

    Ok(res)
}
