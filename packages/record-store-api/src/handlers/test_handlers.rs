//! Test endpoint handlers.
//!
//! Tests are permanent once created; there is no update or delete endpoint.

use hyper::body::{Body, Bytes};
use hyper::{Request, Response};

use record_store_core::Test;

use super::request_utils::{
    json_response, map_store_error_to_router_error, map_validation_error, message_response,
    parse_id_param, parse_json_body, read_request_body_with_timeout, MatchitParams,
};
use crate::router::{AppState, RouterError};

/// Creates a new test.
///
/// # Endpoint
/// `POST /tests`
///
/// # Request Body
/// ```json
/// {
///   "id": 1,
///   "name": "Quiz",
///   "max_score": 100
/// }
/// ```
///
/// # Response
/// - **201 Created**: `{"message": "Test created successfully"}`
///
/// # Errors
/// - **400 Bad Request**: Malformed JSON body
/// - **409 Conflict**: Test ID already exists
/// - **422 Unprocessable Entity**: Name shorter than 2 or longer than 100 characters
pub async fn create_test<B>(
    req: Request<B>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let body_bytes = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;
    let test: Test = parse_json_body(&body_bytes)?;
    test.validate().map_err(map_validation_error)?;

    state
        .store
        .create_test(test)
        .map_err(map_store_error_to_router_error)?;

    message_response(201, "Test created successfully")
}

/// Reads a test.
///
/// # Endpoint
/// `GET /tests/{id}`
pub async fn get_test(
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params, "id")?;
    let test = state
        .store
        .get_test(id)
        .map_err(map_store_error_to_router_error)?;
    json_response(200, test)
}

/// Lists all tests in creation order.
///
/// # Endpoint
/// `GET /tests`
pub async fn list_tests(state: AppState) -> Result<Response<Bytes>, RouterError> {
    json_response(200, state.store.list_tests())
}
