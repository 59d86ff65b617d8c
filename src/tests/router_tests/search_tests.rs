use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_json, builtin_catalog, post_json};

#[test]
fn search_returns_criteria_and_ranked_results() {
    let catalog = builtin_catalog();
    let req = post_json("/api/search", r#"{"query": "3 bedrooms"}"#);

    let resp = handle(req, &catalog).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json = body_json(resp);
    assert_eq!(json["success"], true);
    assert_eq!(json["query"], "3 bedrooms");
    assert_eq!(json["count"], 3);
    assert_eq!(json["criteria"]["bedrooms"], 3);
    assert!(json["criteria"]["location"].is_null());
    assert_eq!(json["criteria"]["amenities"], serde_json::json!([]));

    let ids: Vec<u64> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 5, 7]);
    assert!(json["results"][0]["match_score"].as_f64().unwrap() > 14.0);
    assert_eq!(json["results"][0]["title"], "Beachfront Villa");
}

#[test]
fn search_serializes_full_criteria() {
    let catalog = builtin_catalog();
    let req = post_json(
        "/api/search",
        r#"{"query": "Beachfront villa in Miami with pool under $300"}"#,
    );

    let json = body_json(handle(req, &catalog).unwrap());
    assert_eq!(
        json["criteria"],
        serde_json::json!({
            "location": "Miami",
            "max_price": 300,
            "min_price": null,
            "bedrooms": null,
            "guests": null,
            "amenities": ["Pool"],
            "keywords": ["beachfront"],
        })
    );
    assert_eq!(json["count"], 1);
}

#[test]
fn missing_query_is_bad_request() {
    let catalog = builtin_catalog();

    for body in [r#"{}"#, r#"{"query": ""}"#, r#"{"query": "   "}"#, r#"{"query": null}"#] {
        let err = handle(post_json("/api/search", body), &catalog).unwrap_err();
        assert_eq!(err.status(), 400, "body {body} should be rejected");

        let json = body_json(error_to_response(err));
        assert_eq!(json["error"], "Query is required");
    }
}

#[test]
fn malformed_json_is_bad_request() {
    let catalog = builtin_catalog();
    let err = handle(post_json("/api/search", "query=pool"), &catalog).unwrap_err();

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 400);
    let json = body_json(resp);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[test]
fn search_requires_post() {
    let catalog = builtin_catalog();
    let err = handle(crate::tests::utils::get("/api/search"), &catalog).unwrap_err();
    assert_eq!(err.status(), 404);
}
