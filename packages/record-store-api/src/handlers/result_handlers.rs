//! Test result and aggregate handlers.

use hyper::body::{Body, Bytes};
use hyper::{Request, Response};

use record_store_core::TestResult;

use super::request_utils::{
    json_response, map_store_error_to_router_error, message_response, parse_id_param,
    parse_json_body, read_request_body_with_timeout, MatchitParams,
};
use crate::router::{AppState, RouterError};

/// Submits a test result.
///
/// # Endpoint
/// `POST /results`
///
/// # Request Body
/// ```json
/// {
///   "student_id": 1,
///   "test_id": 1,
///   "score": 85
/// }
/// ```
///
/// # Response
/// - **201 Created**: `{"message": "Test result submitted successfully"}`
///
/// # Errors
/// - **400 Bad Request**: Malformed JSON body, or score exceeds the test maximum
/// - **404 Not Found**: Student or test not found
///
/// # Notes
/// - A second submission for the same student and test replaces the score
/// - Every successful submission appends the test id to the student's `tests_taken`
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:8000/results \
///   -H "Content-Type: application/json" \
///   -d '{"student_id": 1, "test_id": 1, "score": 85}'
/// ```
pub async fn submit_result<B>(
    req: Request<B>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let body_bytes = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;
    let result: TestResult = parse_json_body(&body_bytes)?;

    state
        .store
        .submit_result(result)
        .map_err(map_store_error_to_router_error)?;

    message_response(201, "Test result submitted successfully")
}

/// Lists a student's results.
///
/// # Endpoint
/// `GET /results/student/{id}`
pub async fn student_results(
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params, "id")?;
    let results = state
        .store
        .results_by_student(id)
        .map_err(map_store_error_to_router_error)?;
    json_response(200, results)
}

/// Lists all results recorded for a test.
///
/// # Endpoint
/// `GET /results/test/{id}`
pub async fn test_results(
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params, "id")?;
    let results = state
        .store
        .results_by_test(id)
        .map_err(map_store_error_to_router_error)?;
    json_response(200, results)
}

/// Average score on a test.
///
/// # Endpoint
/// `GET /results/test/{id}/average`
///
/// # Response
/// - **200 OK**: `{"success": true, "data": 80.0}`
///
/// # Errors
/// - **404 Not Found**: Test not found, or no results for the test
pub async fn test_average(
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params, "id")?;
    let average = state
        .store
        .average_score(id)
        .map_err(map_store_error_to_router_error)?;
    json_response(200, average)
}

/// Highest score on a test.
///
/// # Endpoint
/// `GET /results/test/{id}/highest`
pub async fn test_highest(
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params, "id")?;
    let highest = state
        .store
        .highest_score(id)
        .map_err(map_store_error_to_router_error)?;
    json_response(200, highest)
}
