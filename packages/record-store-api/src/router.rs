//! Matchit routing configuration.

use std::sync::Arc;

use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use matchit::Router as MatchitRouter;

use crate::handlers;
use record_store_core::{config::StoreConfig, RecordStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Record store instance
    pub store: Arc<RecordStore>,
    /// Store configuration
    pub config: Arc<StoreConfig>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with default routes.
    pub fn new(store: Arc<RecordStore>, config: Arc<StoreConfig>) -> Self {
        let mut router = MatchitRouter::new();

        // Student endpoints
        router
            .insert("/students", RouteHandler::Students)
            .expect("Failed to insert /students route");
        router
            .insert("/students/{id}", RouteHandler::Student)
            .expect("Failed to insert /students/{id} route");

        // Test endpoints
        router
            .insert("/tests", RouteHandler::Tests)
            .expect("Failed to insert /tests route");
        router
            .insert("/tests/{id}", RouteHandler::Test)
            .expect("Failed to insert /tests/{id} route");

        // Result endpoints
        router
            .insert("/results", RouteHandler::Results)
            .expect("Failed to insert /results route");
        router
            .insert("/results/student/{id}", RouteHandler::StudentResults)
            .expect("Failed to insert /results/student/{id} route");
        router
            .insert("/results/test/{id}", RouteHandler::TestResults)
            .expect("Failed to insert /results/test/{id} route");
        router
            .insert("/results/test/{id}/average", RouteHandler::TestAverage)
            .expect("Failed to insert /results/test/{id}/average route");
        router
            .insert("/results/test/{id}/highest", RouteHandler::TestHighest)
            .expect("Failed to insert /results/test/{id}/highest route");

        Self {
            inner: router,
            state: AppState { store, config },
        }
    }

    /// Routes an incoming request to the appropriate handler.
    ///
    /// A trailing slash on the path is ignored.
    ///
    /// # Arguments
    /// * `req` - HTTP request
    ///
    /// # Returns
    /// `Result<Response<Bytes>, RouterError>` containing the response or an error.
    pub async fn route<B>(&self, req: Request<B>) -> Result<Response<Bytes>, RouterError>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let path = req.uri().path().to_string();
        let trimmed = path.trim_end_matches('/');
        let lookup = if trimmed.is_empty() { "/" } else { trimmed };

        match self.inner.at(lookup) {
            Ok(matched) => {
                let handler = matched.value;
                handler
                    .handle(req, matched.params, self.state.clone())
                    .await
            }
            Err(_) => {
                // Return 404 for unmatched routes
                let error_response = crate::handlers::error_response(
                    404,
                    "Not Found".to_string(),
                    Some(format!("No route found for {}", path)),
                );
                let body = serde_json::to_vec(&error_response).map_err(|e| {
                    RouterError::InternalError(format!("Failed to serialize error response: {}", e))
                })?;
                Ok(Response::builder()
                    .status(404)
                    .header("Content-Type", "application/json")
                    .body(Bytes::from(body))
                    .map_err(|e| {
                        RouterError::InternalError(format!("Failed to build response: {}", e))
                    })?)
            }
        }
    }

    /// Routes a request and converts any error into its JSON error response.
    pub async fn respond<B>(&self, req: Request<B>) -> Response<Bytes>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        match self.route(req).await {
            Ok(response) => {
                tracing::debug!("{} {} -> {}", method, path, response.status());
                response
            }
            Err(err) => {
                tracing::debug!("{} {} -> {}", method, path, err);
                Response::from(err)
            }
        }
    }
}

/// Route handler function.
enum RouteHandler {
    Students,
    Student,
    Tests,
    Test,
    Results,
    StudentResults,
    TestResults,
    TestAverage,
    TestHighest,
}

impl RouteHandler {
    /// Handles a request with the given route parameters.
    async fn handle<B>(
        &self,
        req: Request<B>,
        params: matchit::Params<'_, '_>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let method = req.method().clone();
        match (self, method) {
            (RouteHandler::Students, Method::POST) => handlers::create_student(req, state).await,
            (RouteHandler::Students, Method::GET) => handlers::list_students(state).await,
            (RouteHandler::Student, Method::GET) => handlers::get_student(params, state).await,
            (RouteHandler::Student, Method::DELETE) => {
                handlers::delete_student(params, state).await
            }
            (RouteHandler::Tests, Method::POST) => handlers::create_test(req, state).await,
            (RouteHandler::Tests, Method::GET) => handlers::list_tests(state).await,
            (RouteHandler::Test, Method::GET) => handlers::get_test(params, state).await,
            (RouteHandler::Results, Method::POST) => handlers::submit_result(req, state).await,
            (RouteHandler::StudentResults, Method::GET) => {
                handlers::student_results(params, state).await
            }
            (RouteHandler::TestResults, Method::GET) => {
                handlers::test_results(params, state).await
            }
            (RouteHandler::TestAverage, Method::GET) => {
                handlers::test_average(params, state).await
            }
            (RouteHandler::TestHighest, Method::GET) => {
                handlers::test_highest(params, state).await
            }
            _ => Err(RouterError::MethodNotAllowed),
        }
    }
}

/// Router error type.
#[derive(Debug)]
pub enum RouterError {
    MethodNotAllowed,
    InternalError(String),
    Timeout,
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unprocessable(String),
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            RouterError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
            RouterError::Timeout => write!(f, "Request Timeout"),
            RouterError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            RouterError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            RouterError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            RouterError::Unprocessable(msg) => write!(f, "Unprocessable Entity: {}", msg),
        }
    }
}

impl std::error::Error for RouterError {}

impl RouterError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            RouterError::MethodNotAllowed => 405,
            RouterError::InternalError(_) => 500,
            RouterError::Timeout => 408,
            RouterError::BadRequest(_) => 400,
            RouterError::NotFound(_) => 404,
            RouterError::Conflict(_) => 409,
            RouterError::Unprocessable(_) => 422,
        }
    }
}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let status = err.status();
        let message = match &err {
            RouterError::MethodNotAllowed => "Method Not Allowed",
            RouterError::Timeout => "Request Timeout",
            RouterError::InternalError(msg)
            | RouterError::BadRequest(msg)
            | RouterError::NotFound(msg)
            | RouterError::Conflict(msg)
            | RouterError::Unprocessable(msg) => msg.as_str(),
        };

        let error_response = crate::handlers::error_response(status, message.to_string(), None);
        let body = serde_json::to_vec(&error_response)
            .unwrap_or_else(|e| format!("{{\"success\":false,\"error\":{{\"code\":\"500\",\"message\":\"Failed to serialize error: {}\"}}}}", e).into_bytes());

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                let mut fallback = Response::new(Bytes::from("Internal Server Error"));
                *fallback.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
                fallback
            })
    }
}
