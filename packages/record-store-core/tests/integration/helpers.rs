//! Shared fixtures for integration tests.

use record_store_core::{RecordStore, Student, Test};

/// Creates students `1..=students` and tests `1..=tests` with max score 100.
pub fn populated_store(students: i64, tests: i64) -> RecordStore {
    let store = RecordStore::new();
    for id in 1..=students {
        store
            .create_student(Student::new(
                id,
                format!("Student {}", id),
                format!("s{}@x.com", id),
            ))
            .unwrap();
    }
    for id in 1..=tests {
        store
            .create_test(Test::new(id, format!("Test {}", id), 100))
            .unwrap();
    }
    store
}
