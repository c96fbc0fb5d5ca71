//! Student entity.

use serde::{Deserialize, Serialize};

use super::test::TestId;
use super::validation;
use crate::error::{EntityKind, ValidationError};

/// Student identifier.
pub type StudentId = i64;

/// A student and the tests they have submitted results for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier for the student
    pub id: StudentId,
    /// Full name (2-50 characters)
    pub name: String,
    /// Email address
    pub email: String,
    /// Test identifiers in submission order, one entry per submission
    #[serde(default)]
    pub tests_taken: Vec<TestId>,
}

impl Student {
    /// Creates a student with an empty `tests_taken` list.
    pub fn new(id: StudentId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            tests_taken: Vec::new(),
        }
    }

    /// Checks the name length bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_length(
            EntityKind::Student,
            "name",
            &self.name,
            validation::STUDENT_NAME_MIN,
            validation::STUDENT_NAME_MAX,
        )
    }
}
