use std::sync::Arc;

use serde_json::Value;

use super::{resolve_reader, resolve_writer};
use crate::error::{Failure, RequestError};
use crate::media::MediaType;
use crate::model::{HandlerRequest, ResponseModel};
use crate::routing::{Route, RouteRegistry};
use crate::transform::{JsonReader, JsonWriter, Writer};

fn noop(_req: &HandlerRequest, _res: &mut ResponseModel) -> Result<(), Box<dyn Failure>> {
    Ok(())
}

struct PlainWriter;

impl Writer for PlainWriter {
    fn media_type(&self) -> MediaType {
        MediaType::new("text", "plain")
    }

    fn write(&self, entity: &Value) -> anyhow::Result<Vec<u8>> {
        Ok(entity.to_string().into_bytes())
    }
}

fn route_consuming(consumes: Vec<MediaType>) -> Route {
    let mut registry = RouteRegistry::new();
    registry
        .post("/orders", noop)
        .expect("route")
        .consumes(consumes);
    let mut routes = registry.into_routes();
    let mut route = routes.remove(0);
    route.bind_readers(&[(MediaType::json(), Arc::new(JsonReader))]);
    route
}

fn route_producing(produces: Vec<MediaType>) -> Route {
    let mut registry = RouteRegistry::new();
    registry
        .get("/orders", noop)
        .expect("route")
        .produces(produces);
    registry.into_routes().remove(0)
}

fn writer_table() -> Vec<(MediaType, Arc<dyn Writer>)> {
    vec![
        (MediaType::json(), Arc::new(JsonWriter)),
        (MediaType::new("text", "plain"), Arc::new(PlainWriter)),
    ]
}

#[test]
fn test_exact_content_type_resolves_reader() {
    let route = route_consuming(vec![MediaType::json()]);
    let reader = resolve_reader(&route, Some("application/json")).expect("reader");
    assert_eq!(reader.media_type(), MediaType::json());
}

#[test]
fn test_content_type_parameters_are_ignored() {
    let route = route_consuming(vec![MediaType::json()]);
    assert!(resolve_reader(&route, Some("application/json; charset=utf-8")).is_ok());
}

#[test]
fn test_missing_content_type_matches_any_bound_reader() {
    let route = route_consuming(vec![MediaType::json()]);
    assert!(resolve_reader(&route, None).is_ok());
}

#[test]
fn test_incompatible_content_type_is_unsupported() {
    let route = route_consuming(vec![MediaType::json()]);
    let err = resolve_reader(&route, Some("text/plain")).err().expect("no reader");
    match err {
        RequestError::UnsupportedMediaType { content_type } => {
            assert_eq!(content_type.as_deref(), Some("text/plain"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_wildcard_consumes_binds_no_reader_for_unregistered_type() {
    // The route accepts anything, but only a JSON reader is registered.
    let route = route_consuming(vec![MediaType::wildcard()]);
    assert!(resolve_reader(&route, Some("application/json")).is_ok());
    assert!(resolve_reader(&route, Some("text/csv")).is_err());
}

#[test]
fn test_accept_quality_orders_writer_choice() {
    let route = route_producing(vec![MediaType::wildcard()]);
    let (media, _) = resolve_writer(
        &route,
        Some("application/json;q=0.5, text/plain;q=0.9"),
        &writer_table(),
    )
    .expect("writer");
    assert_eq!(media, MediaType::new("text", "plain"));
}

#[test]
fn test_exact_beats_wildcard_within_an_entry() {
    let route = route_producing(vec![MediaType::wildcard()]);
    let (media, _) =
        resolve_writer(&route, Some("application/json"), &writer_table()).expect("writer");
    assert_eq!(media, MediaType::json());
}

#[test]
fn test_missing_accept_takes_first_registered_writer() {
    let route = route_producing(vec![MediaType::wildcard()]);
    let (media, _) = resolve_writer(&route, None, &writer_table()).expect("writer");
    assert_eq!(media, MediaType::json());
}

#[test]
fn test_produces_constrains_writer_choice() {
    let route = route_producing(vec![MediaType::new("text", "plain")]);
    // The client prefers JSON, but the route only produces text/plain.
    let (media, _) = resolve_writer(
        &route,
        Some("application/json;q=0.9, */*;q=0.1"),
        &writer_table(),
    )
    .expect("writer");
    assert_eq!(media, MediaType::new("text", "plain"));
}

#[test]
fn test_unsatisfiable_accept_is_not_acceptable() {
    let route = route_producing(vec![MediaType::json()]);
    let err = resolve_writer(&route, Some("image/png"), &writer_table())
        .err()
        .expect("no writer");
    assert!(matches!(err, RequestError::NotAcceptable));
}

#[test]
fn test_subtype_wildcard_accept_resolves_concrete_writer() {
    let route = route_producing(vec![MediaType::wildcard()]);
    let (media, _) =
        resolve_writer(&route, Some("application/*"), &writer_table()).expect("writer");
    assert_eq!(media, MediaType::json());
}
