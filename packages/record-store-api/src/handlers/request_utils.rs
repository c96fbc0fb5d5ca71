//! Request utilities for HTTP endpoints.

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time;

use record_store_core::{StoreError, ValidationError};

use super::response::{success_response, MessageResponse};
use crate::router::RouterError;

/// Type alias for matchit parameters with explicit lifetimes
pub type MatchitParams<'a, 'b> = matchit::Params<'a, 'b>;

/// Helper function to read request body with timeout
pub async fn read_request_body_with_timeout<B>(
    req: Request<B>,
    timeout_ms: u64,
) -> Result<Bytes, RouterError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let body = time::timeout(timeout_duration, req.into_body().collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| RouterError::InternalError(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Parses a JSON request body into an entity.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, RouterError> {
    serde_json::from_slice(body)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))
}

/// Parses an integer identifier from a path parameter.
pub fn parse_id_param(params: &MatchitParams<'_, '_>, name: &str) -> Result<i64, RouterError> {
    let raw = params
        .get(name)
        .ok_or_else(|| RouterError::BadRequest(format!("Missing path parameter '{}'", name)))?;
    raw.parse()
        .map_err(|e| RouterError::BadRequest(format!("Invalid {} '{}': {}", name, raw, e)))
}

/// Map StoreError to appropriate RouterError
pub fn map_store_error_to_router_error(e: StoreError) -> RouterError {
    match e {
        StoreError::Conflict { .. } => RouterError::Conflict(e.to_string()),
        StoreError::NotFound { .. } | StoreError::NoResults { .. } => {
            RouterError::NotFound(e.to_string())
        }
        StoreError::InvalidScore { .. } => RouterError::BadRequest(e.to_string()),
    }
}

/// Map ValidationError to RouterError
pub fn map_validation_error(e: ValidationError) -> RouterError {
    RouterError::Unprocessable(e.to_string())
}

/// Helper to build HTTP response with proper error handling
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Wraps `data` in the success envelope and builds the response.
pub fn json_response<T: Serialize>(status: u16, data: T) -> Result<Response<Bytes>, RouterError> {
    let json = serde_json::to_vec(&success_response(data))
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;
    build_response(status, json)
}

/// Builds a confirmation message response.
pub fn message_response(status: u16, message: &str) -> Result<Response<Bytes>, RouterError> {
    json_response(
        status,
        MessageResponse {
            message: message.to_string(),
        },
    )
}
