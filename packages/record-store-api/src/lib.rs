//! REST API server for the record store.
//!
//! Provides HTTP endpoints for students, tests, results and
//! score aggregates, plus request routing.

pub mod handlers;
pub mod router;
pub mod server;
