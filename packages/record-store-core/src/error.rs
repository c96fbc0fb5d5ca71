//! Store error types.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Entity kinds that can be addressed by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Student,
    Test,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Student => write!(f, "Student"),
            EntityKind::Test => write!(f, "Test"),
        }
    }
}

/// Record store operation errors.
///
/// Every variant is a caller or input error. An operation that returns
/// one of these has left the store unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Identifier already present on create
    #[error("{entity} ID {id} already exists")]
    Conflict { entity: EntityKind, id: i64 },

    /// Referenced entity absent
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    /// Score above the test maximum
    #[error("Score {score} exceeds maximum allowed {max_score}")]
    InvalidScore { score: i64, max_score: i64 },

    /// Aggregation over a test with no results
    #[error("No results found for test {test_id}")]
    NoResults { test_id: i64 },
}

impl StoreError {
    pub(crate) fn student_not_found(id: i64) -> Self {
        StoreError::NotFound {
            entity: EntityKind::Student,
            id,
        }
    }

    pub(crate) fn test_not_found(id: i64) -> Self {
        StoreError::NotFound {
            entity: EntityKind::Test,
            id,
        }
    }
}

/// Field validation failure raised before a value reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{entity}.{field}: {message}")]
pub struct ValidationError {
    /// Entity the field belongs to
    pub entity: EntityKind,
    /// Field name
    pub field: &'static str,
    /// Human-readable reason
    pub message: String,
}
