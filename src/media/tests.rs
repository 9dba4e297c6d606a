use super::{parse_accept, MediaType, Specificity};

#[test]
fn test_parse_normalizes_case_and_params() {
    let mt = MediaType::parse("Application/JSON; charset=utf-8").expect("parse");
    assert_eq!(mt, MediaType::json());
    assert_eq!(mt.to_string(), "application/json");
}

#[test]
fn test_parse_rejects_malformed() {
    assert!(MediaType::parse("").is_none());
    assert!(MediaType::parse("application").is_none());
    assert!(MediaType::parse("/json").is_none());
    assert!(MediaType::parse("application/").is_none());
}

#[test]
fn test_bare_star_is_full_wildcard() {
    let mt = MediaType::parse("*").expect("parse");
    assert_eq!(mt, MediaType::wildcard());
}

#[test]
fn test_specificity_ordering() {
    assert!(Specificity::Exact > Specificity::SubtypeWildcard);
    assert!(Specificity::SubtypeWildcard > Specificity::FullWildcard);
}

#[test]
fn test_matches_ranks_pairings() {
    let json = MediaType::json();
    let any_app = MediaType::new("application", "*");
    let any = MediaType::wildcard();
    let xml = MediaType::new("application", "xml");

    assert_eq!(json.matches(&json), Some(Specificity::Exact));
    assert_eq!(json.matches(&any_app), Some(Specificity::SubtypeWildcard));
    assert_eq!(json.matches(&any), Some(Specificity::FullWildcard));
    assert_eq!(json.matches(&xml), None);
    assert_eq!(
        MediaType::new("text", "html").matches(&any_app),
        None,
        "wildcard subtype still requires matching primary type"
    );
}

#[test]
fn test_accept_orders_by_quality() {
    let entries = parse_accept("text/html;q=0.5, application/json, application/xml;q=0.9");
    let order: Vec<String> = entries.iter().map(|e| e.media.to_string()).collect();
    assert_eq!(
        order,
        vec!["application/json", "application/xml", "text/html"]
    );
}

#[test]
fn test_accept_equal_quality_keeps_header_order() {
    let entries = parse_accept("application/xml, application/json");
    let order: Vec<String> = entries.iter().map(|e| e.media.to_string()).collect();
    assert_eq!(order, vec!["application/xml", "application/json"]);
}

#[test]
fn test_accept_skips_malformed_entries() {
    let entries = parse_accept("garbage, application/json;q=nonsense, text/plain;q=0.2");
    let order: Vec<String> = entries.iter().map(|e| e.media.to_string()).collect();
    // An unparseable q-value falls back to 1.0; an unparseable type is dropped.
    assert_eq!(order, vec!["application/json", "text/plain"]);
}
