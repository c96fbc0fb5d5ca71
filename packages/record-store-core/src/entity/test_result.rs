//! Test result entity and its composite key.

use serde::{Deserialize, Serialize};

use super::student::StudentId;
use super::test::TestId;

/// Score a student obtained on a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// ID of the student taking the test
    pub student_id: StudentId,
    /// ID of the test taken
    pub test_id: TestId,
    /// Score obtained in the test
    pub score: i64,
}

impl TestResult {
    pub fn new(student_id: StudentId, test_id: TestId, score: i64) -> Self {
        Self {
            student_id,
            test_id,
            score,
        }
    }

    /// Returns the (student, test) key this result is stored under.
    pub fn key(&self) -> ResultKey {
        ResultKey {
            student_id: self.student_id,
            test_id: self.test_id,
        }
    }
}

/// Ordered (student, test) pair. At most one result exists per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResultKey {
    pub student_id: StudentId,
    pub test_id: TestId,
}
