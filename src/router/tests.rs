use std::sync::Arc;

use http::Method;

use super::Router;
use crate::error::Failure;
use crate::model::{HandlerRequest, ResponseModel};
use crate::path::ParamValue;
use crate::routing::RouteRegistry;

fn noop(_req: &HandlerRequest, _res: &mut ResponseModel) -> Result<(), Box<dyn Failure>> {
    Ok(())
}

fn router_for(templates: &[(&Method, &str)]) -> Router {
    let mut registry = RouteRegistry::new();
    for (method, path) in templates {
        registry.route((*method).clone(), path, noop).expect("route");
    }
    Router::new(registry.into_routes().into_iter().map(Arc::new).collect())
}

#[test]
fn test_literal_match_is_exact_and_case_sensitive() {
    let router = router_for(&[(&Method::GET, "/orders")]);
    assert!(router.route(&Method::GET, "/orders").is_some());
    assert!(router.route(&Method::GET, "/Orders").is_none());
    assert!(router.route(&Method::GET, "/orders/extra").is_none());
    assert!(router.route(&Method::POST, "/orders").is_none());
}

#[test]
fn test_typed_param_extraction() {
    let router = router_for(&[(&Method::GET, "/items/$id:Integer")]);

    let matched = router.route(&Method::GET, "/items/42").expect("match");
    assert_eq!(matched.params.len(), 1);
    assert_eq!(matched.params[0].0, "id");
    assert_eq!(matched.params[0].1, ParamValue::Int(42));

    // Out-of-domain text disqualifies the route instead of failing.
    assert!(router.route(&Method::GET, "/items/abc").is_none());
    // i32 overflow is out of domain for Integer.
    assert!(router.route(&Method::GET, "/items/3000000000").is_none());
}

#[test]
fn test_untyped_param_defaults_to_string() {
    let router = router_for(&[(&Method::GET, "/users/$name")]);
    let matched = router.route(&Method::GET, "/users/ada").expect("match");
    assert_eq!(matched.params[0].1, ParamValue::Str("ada".to_string()));
}

#[test]
fn test_failed_conversion_falls_through_to_later_route() {
    let router = router_for(&[
        (&Method::GET, "/items/$id:Integer"),
        (&Method::GET, "/items/$slug"),
    ]);

    let numeric = router.route(&Method::GET, "/items/7").expect("match");
    assert_eq!(numeric.params[0].1, ParamValue::Int(7));

    let textual = router.route(&Method::GET, "/items/widget").expect("match");
    assert_eq!(textual.params[0].1, ParamValue::Str("widget".to_string()));
}

#[test]
fn test_registration_order_breaks_ties() {
    let router = router_for(&[
        (&Method::GET, "/items/$a"),
        (&Method::GET, "/items/$b"),
    ]);
    let matched = router.route(&Method::GET, "/items/x").expect("match");
    assert_eq!(matched.params[0].0, "a");
}

#[test]
fn test_root_route_matches_root_path() {
    let router = router_for(&[(&Method::GET, "/")]);
    assert!(router.route(&Method::GET, "/").is_some());
    assert!(router.route(&Method::GET, "").is_some());
    assert!(router.route(&Method::GET, "/x").is_none());
}

#[test]
fn test_repeated_param_captures_each_occurrence() {
    let router = router_for(&[(&Method::GET, "/pair/$id:Integer/$id:Integer")]);
    let matched = router.route(&Method::GET, "/pair/1/2").expect("match");
    assert_eq!(matched.params.len(), 2);
    // Lookup through the handler request is last-write-wins.
    let req = HandlerRequest {
        method: Method::GET,
        path: "/pair/1/2".to_string(),
        params: matched.params,
        headers: std::collections::HashMap::new(),
        entity: None,
    };
    assert_eq!(req.param("id"), Some(&ParamValue::Int(2)));
}
