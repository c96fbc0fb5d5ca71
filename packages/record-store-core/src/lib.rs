//! Core record store for students, tests and test results.
//!
//! Provides entity types, input validation, the lock-guarded
//! relational store with cascading delete, and aggregation queries.

pub mod config;
pub mod entity;
pub mod error;
pub mod store;

pub use entity::{ResultKey, Student, StudentId, Test, TestId, TestResult};
pub use error::{EntityKind, StoreError, ValidationError};
pub use store::RecordStore;
