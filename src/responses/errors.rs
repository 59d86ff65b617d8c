use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// Convert a ServerError into a JSON error response: `{"error": "..."}`
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        // Startup details stay in the logs.
        ServerError::Config(_) => ServerError::InternalError.to_string(),
        other => other.to_string(),
    };
    let body = json!({ "error": message }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
