//! Student endpoint handlers.

use hyper::body::{Body, Bytes};
use hyper::{Request, Response};

use record_store_core::Student;

use super::request_utils::{
    json_response, map_store_error_to_router_error, map_validation_error, message_response,
    parse_id_param, parse_json_body, read_request_body_with_timeout, MatchitParams,
};
use crate::router::{AppState, RouterError};

/// Creates a new student.
///
/// # Endpoint
/// `POST /students`
///
/// # Request Body
/// ```json
/// {
///   "id": 1,
///   "name": "Ana",
///   "email": "a@x.com",
///   "tests_taken": []
/// }
/// ```
///
/// # Response
/// - **201 Created**: `{"message": "Student created successfully"}`
///
/// # Errors
/// - **400 Bad Request**: Malformed JSON body
/// - **409 Conflict**: Student ID already exists
/// - **422 Unprocessable Entity**: Name shorter than 2 or longer than 50 characters
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:8000/students \
///   -H "Content-Type: application/json" \
///   -d '{"id": 1, "name": "Ana", "email": "a@x.com"}'
/// ```
pub async fn create_student<B>(
    req: Request<B>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let body_bytes = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;
    let student: Student = parse_json_body(&body_bytes)?;
    student.validate().map_err(map_validation_error)?;

    state
        .store
        .create_student(student)
        .map_err(map_store_error_to_router_error)?;

    message_response(201, "Student created successfully")
}

/// Reads a student.
///
/// # Endpoint
/// `GET /students/{id}`
///
/// # Errors
/// - **400 Bad Request**: Non-integer id
/// - **404 Not Found**: Student not found
pub async fn get_student(
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params, "id")?;
    let student = state
        .store
        .get_student(id)
        .map_err(map_store_error_to_router_error)?;
    json_response(200, student)
}

/// Lists all students in creation order.
///
/// # Endpoint
/// `GET /students`
pub async fn list_students(state: AppState) -> Result<Response<Bytes>, RouterError> {
    json_response(200, state.store.list_students())
}

/// Deletes a student together with all of its results.
///
/// # Endpoint
/// `DELETE /students/{id}`
///
/// # Response
/// - **200 OK**: `{"message": "Student deleted successfully"}`
///
/// # Errors
/// - **400 Bad Request**: Non-integer id
/// - **404 Not Found**: Student not found
///
/// # Example
/// ```bash
/// curl -X DELETE http://localhost:8000/students/1
/// ```
pub async fn delete_student(
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params, "id")?;
    state
        .store
        .delete_student(id)
        .map_err(map_store_error_to_router_error)?;
    message_response(200, "Student deleted successfully")
}
