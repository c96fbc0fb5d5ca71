//! Entity types stored by the record store.
//!
//! Each entity has:
//! - A caller-assigned integer identifier
//! - Serde field names matching the wire schema
//! - Field validation used by transports before calling the store

mod student;
mod test_result;
pub mod validation;

pub use student::{Student, StudentId};
pub use test::{Test, TestId};
pub use test_result::{ResultKey, TestResult};
