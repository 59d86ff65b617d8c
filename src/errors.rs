use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors raised while serving a request or starting the server.
/// The search core itself never fails; everything here is request plumbing.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Config(_) | ServerError::InternalError => 500,
        }
    }
}
