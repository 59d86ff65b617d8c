use crate::router::handle;
use crate::tests::utils::{body_string, builtin_catalog, get};

#[test]
fn home_page_renders_search_form() {
    let catalog = builtin_catalog();
    let resp = handle(get("/"), &catalog).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Find a place to stay"));
    assert!(body.contains(r#"name="q""#));
    assert!(!body.contains("Match score"));
}

#[test]
fn home_page_runs_search_from_query_string() {
    let catalog = builtin_catalog();
    let resp = handle(get("/?q=beachfront+villa+in+%24miami"), &catalog).unwrap();

    let body = body_string(resp);
    assert!(body.contains("Found 1 listing"));
    assert!(body.contains("Beachfront Villa"));
    assert!(!body.contains("Historic Brownstone"));
    assert!(body.contains("Location: Miami"));
}

#[test]
fn blank_query_string_shows_empty_page() {
    let catalog = builtin_catalog();
    let body = body_string(handle(get("/?q=+++"), &catalog).unwrap());
    assert!(!body.contains("Found"));
}
