use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_json, builtin_catalog, get};

#[test]
fn lists_whole_catalog() {
    let catalog = builtin_catalog();
    let resp = handle(get("/api/listings"), &catalog).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let json = body_json(resp);
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 8);

    let listings = json["listings"].as_array().unwrap();
    assert_eq!(listings.len(), 8);
    assert_eq!(listings[0]["title"], "Cozy Downtown Apartment");
    assert_eq!(listings[0]["location"], "New York, NY");
    assert!(listings[0].get("match_score").is_none());
}

#[test]
fn unknown_route_is_json_404() {
    let catalog = builtin_catalog();
    let err = handle(get("/api/nope"), &catalog).unwrap_err();

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["error"], "Not Found");
}
