use crate::domain::{interpret, rank, Catalog, Listing, ScoredListing, SearchCriteria};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates;
use astra::Request;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct SearchRequest {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub criteria: SearchCriteria,
    pub results: Vec<ScoredListing>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
struct ListingsResponse<'a> {
    success: bool,
    listings: &'a [Listing],
    count: usize,
}

pub fn handle(mut req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let params = parse_query(&req);
            let outcome = params
                .get("q")
                .map(|q| q.trim())
                .filter(|q| !q.is_empty())
                .map(|q| run_search(catalog, q));
            html_response(templates::pages::home_page(outcome.as_ref()))
        }
        ("POST", "/api/search") => {
            let body = read_body(&mut req)?;
            let payload: SearchRequest = serde_json::from_slice(&body).map_err(|e| {
                tracing::warn!(error = %e, "rejecting malformed search body");
                ServerError::BadRequest(format!("Invalid JSON body: {e}"))
            })?;

            let query = payload.query.unwrap_or_default();
            if query.trim().is_empty() {
                tracing::warn!("rejecting search without query");
                return Err(ServerError::BadRequest("Query is required".into()));
            }

            json_response(&run_search(catalog, &query))
        }
        ("GET", "/api/listings") => json_response(&ListingsResponse {
            success: true,
            listings: catalog.listings(),
            count: catalog.len(),
        }),
        _ => Err(ServerError::NotFound),
    }
}

/// Interpret `query`, rank the catalog against it and package the response.
pub fn run_search(catalog: &Catalog, query: &str) -> SearchResponse {
    let criteria = interpret(query);
    tracing::debug!(?criteria, "interpreted query");

    let results = rank(catalog.listings(), &criteria);
    tracing::info!(query, count = results.len(), "search complete");

    SearchResponse {
        success: true,
        query: query.to_string(),
        count: results.len(),
        criteria,
        results,
    }
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {e}")))?;
    Ok(buf)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
