//! Record store holding students, tests and test results.
//!
//! All three collections sit behind one `RwLock`, so compound operations
//! (submit-result's upsert plus append, delete-student's cascade) are
//! atomic with respect to every other operation.

mod collection;


use parking_lot::RwLock;

use crate::config::StoreConfig;
use crate::entity::{ResultKey, Student, StudentId, Test, TestId, TestResult};
use crate::error::{EntityKind, StoreError};

use collection::Collection;

/// In-memory relational store with referential integrity.
#[derive(Debug)]
pub struct RecordStore {
    tables: RwLock<Tables>,
}

/// Collections guarded together by the store lock.
#[derive(Debug)]
struct Tables {
    students: Collection<StudentId, Student>,
    tests: Collection<TestId, Test>,
    results: Collection<ResultKey, TestResult>,
}

impl Tables {
    fn student(&self, id: StudentId) -> Result<&Student, StoreError> {
        self.students
            .get(&id)
            .ok_or_else(|| StoreError::student_not_found(id))
    }

    fn test(&self, id: TestId) -> Result<&Test, StoreError> {
        self.tests
            .get(&id)
            .ok_or_else(|| StoreError::test_not_found(id))
    }

    /// Scores of every result for an existing test, failing on an empty set.
    fn scores_for(&self, test_id: TestId) -> Result<Vec<i64>, StoreError> {
        self.test(test_id)?;
        let scores: Vec<i64> = self
            .results
            .values()
            .filter(|r| r.test_id == test_id)
            .map(|r| r.score)
            .collect();
        if scores.is_empty() {
            return Err(StoreError::NoResults { test_id });
        }
        Ok(scores)
    }
}

impl RecordStore {
    /// Creates a new empty store with default capacities.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Creates a new empty store pre-sized from the configuration.
    pub fn with_config(config: &StoreConfig) -> Self {
        Self {
            tables: RwLock::new(Tables {
                students: Collection::with_capacity(config.initial_student_capacity),
                tests: Collection::with_capacity(config.initial_test_capacity),
                results: Collection::with_capacity(config.initial_result_capacity),
            }),
        }
    }

    /// Inserts a new student.
    ///
    /// The caller-supplied `tests_taken` list is stored as given.
    ///
    /// # Errors
    /// `StoreError::Conflict` if a student with the same id exists.
    pub fn create_student(&self, student: Student) -> Result<(), StoreError> {
        let mut tables = self.tables.write();
        if tables.students.contains_key(&student.id) {
            tracing::debug!("Rejected student {}: id already exists", student.id);
            return Err(StoreError::Conflict {
                entity: EntityKind::Student,
                id: student.id,
            });
        }
        tracing::debug!("Creating student {} ({})", student.id, student.name);
        tables.students.upsert(student.id, student);
        Ok(())
    }

    /// Returns a snapshot of the student with the given id.
    pub fn get_student(&self, id: StudentId) -> Result<Student, StoreError> {
        let tables = self.tables.read();
        tables.student(id).cloned()
    }

    /// Returns all students in insertion order.
    pub fn list_students(&self) -> Vec<Student> {
        let tables = self.tables.read();
        tables.students.values().cloned().collect()
    }

    /// Inserts a new test.
    ///
    /// # Errors
    /// `StoreError::Conflict` if a test with the same id exists.
    pub fn create_test(&self, test: Test) -> Result<(), StoreError> {
        let mut tables = self.tables.write();
        if tables.tests.contains_key(&test.id) {
            tracing::debug!("Rejected test {}: id already exists", test.id);
            return Err(StoreError::Conflict {
                entity: EntityKind::Test,
                id: test.id,
            });
        }
        tracing::debug!(
            "Creating test {} ({}, max score {})",
            test.id,
            test.name,
            test.max_score
        );
        tables.tests.upsert(test.id, test);
        Ok(())
    }

    /// Returns a snapshot of the test with the given id.
    pub fn get_test(&self, id: TestId) -> Result<Test, StoreError> {
        let tables = self.tables.read();
        tables.test(id).cloned()
    }

    /// Returns all tests in insertion order.
    pub fn list_tests(&self) -> Vec<Test> {
        let tables = self.tables.read();
        tables.tests.values().cloned().collect()
    }

    /// Records a student's score on a test.
    ///
    /// Checks run in order: student exists, test exists, score does not
    /// exceed the test maximum. There is no lower bound on the score.
    ///
    /// On success the result replaces any earlier one for the same
    /// (student, test) pair, and `test_id` is appended to the student's
    /// `tests_taken` even when an earlier result was replaced.
    pub fn submit_result(&self, result: TestResult) -> Result<(), StoreError> {
        let mut tables = self.tables.write();
        tables.student(result.student_id)?;
        let max_score = tables.test(result.test_id)?.max_score;
        if result.score > max_score {
            tracing::debug!(
                "Rejected result for student {} on test {}: score {} > {}",
                result.student_id,
                result.test_id,
                result.score,
                max_score
            );
            return Err(StoreError::InvalidScore {
                score: result.score,
                max_score,
            });
        }

        let key = result.key();
        let previous = tables.results.upsert(key, result);
        if let Some(student) = tables.students.get_mut(&key.student_id) {
            student.tests_taken.push(key.test_id);
        }
        tracing::debug!(
            "Stored result for student {} on test {} (replaced: {})",
            key.student_id,
            key.test_id,
            previous.is_some()
        );
        Ok(())
    }

    /// Returns every result of an existing student.
    pub fn results_by_student(&self, student_id: StudentId) -> Result<Vec<TestResult>, StoreError> {
        let tables = self.tables.read();
        tables.student(student_id)?;
        Ok(tables
            .results
            .values()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect())
    }

    /// Returns every result recorded for an existing test.
    pub fn results_by_test(&self, test_id: TestId) -> Result<Vec<TestResult>, StoreError> {
        let tables = self.tables.read();
        tables.test(test_id)?;
        Ok(tables
            .results
            .values()
            .filter(|r| r.test_id == test_id)
            .cloned()
            .collect())
    }

    /// Arithmetic mean of all scores on a test.
    ///
    /// # Errors
    /// `StoreError::NotFound` if the test is absent, `StoreError::NoResults`
    /// if nobody has a result for it.
    pub fn average_score(&self, test_id: TestId) -> Result<f64, StoreError> {
        let tables = self.tables.read();
        let scores = tables.scores_for(test_id)?;
        let sum: i128 = scores.iter().map(|&s| i128::from(s)).sum();
        Ok(sum as f64 / scores.len() as f64)
    }

    /// Highest score recorded on a test.
    ///
    /// # Errors
    /// Same as [`RecordStore::average_score`].
    pub fn highest_score(&self, test_id: TestId) -> Result<i64, StoreError> {
        let tables = self.tables.read();
        let scores = tables.scores_for(test_id)?;
        scores
            .into_iter()
            .max()
            .ok_or(StoreError::NoResults { test_id })
    }

    /// Removes a student and every result that references it.
    pub fn delete_student(&self, id: StudentId) -> Result<(), StoreError> {
        let mut tables = self.tables.write();
        if tables.students.remove(&id).is_none() {
            return Err(StoreError::student_not_found(id));
        }
        let removed = tables.results.retain(|key, _| key.student_id != id);
        tracing::debug!("Deleted student {} and {} result(s)", id, removed);
        Ok(())
    }

    /// Returns the number of stored students.
    pub fn student_count(&self) -> usize {
        self.tables.read().students.len()
    }

    /// Returns the number of stored tests.
    pub fn test_count(&self) -> usize {
        self.tables.read().tests.len()
    }

    /// Returns the number of stored results.
    pub fn result_count(&self) -> usize {
        self.tables.read().results.len()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
