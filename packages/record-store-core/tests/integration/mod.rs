//! Integration test suite for the record store.
//!
//! 1. End-to-end workflows through the public API
//! 2. Concurrent access and atomicity of compound operations

pub mod concurrency_tests;
pub mod end_to_end_tests;
pub mod helpers;
