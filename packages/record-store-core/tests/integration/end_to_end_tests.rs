//! End-to-end workflow tests.

use record_store_core::entity::validation;
use record_store_core::{EntityKind, RecordStore, Student, StoreError, Test, TestResult};

use super::helpers::populated_store;

/// Create → submit → aggregate → delete → verify cascade
#[test]
fn test_example_scenario() {
    let store = RecordStore::new();
    store
        .create_student(Student::new(1, "Ana", "a@x.com"))
        .unwrap();
    store.create_test(Test::new(1, "Quiz", 100)).unwrap();
    store.submit_result(TestResult::new(1, 1, 85)).unwrap();

    assert_eq!(store.average_score(1).unwrap(), 85.0);
    assert_eq!(store.highest_score(1).unwrap(), 85);

    store.delete_student(1).unwrap();
    assert!(store.results_by_test(1).unwrap().is_empty());
    assert!(store.list_students().is_empty());
}

#[test]
fn test_lookup_returns_exact_entities() {
    let store = RecordStore::new();
    let students: Vec<Student> = (1..=20)
        .map(|id| Student::new(id, format!("Student {}", id), format!("s{}@x.com", id)))
        .collect();
    let tests: Vec<Test> = (100..110)
        .map(|id| Test::new(id, format!("Test {}", id), id * 2))
        .collect();

    for s in &students {
        store.create_student(s.clone()).unwrap();
    }
    for t in &tests {
        store.create_test(t.clone()).unwrap();
    }

    for s in &students {
        assert_eq!(&store.get_student(s.id).unwrap(), s);
    }
    for t in &tests {
        assert_eq!(&store.get_test(t.id).unwrap(), t);
    }
    assert_eq!(store.list_students(), students);
    assert_eq!(store.list_tests(), tests);
}

#[test]
fn test_cascade_only_touches_deleted_student() {
    let store = populated_store(3, 3);
    for student_id in 1..=3 {
        for test_id in 1..=3 {
            store
                .submit_result(TestResult::new(student_id, test_id, student_id * 10 + test_id))
                .unwrap();
        }
    }
    assert_eq!(store.result_count(), 9);

    store.delete_student(2).unwrap();

    assert_eq!(store.result_count(), 6);
    for test_id in 1..=3 {
        let results = store.results_by_test(test_id).unwrap();
        let owners: Vec<_> = results.iter().map(|r| r.student_id).collect();
        assert_eq!(owners, vec![1, 3]);
    }
    assert_eq!(store.results_by_student(1).unwrap().len(), 3);
    assert_eq!(store.results_by_student(3).unwrap().len(), 3);
    assert_eq!(
        store.results_by_student(2).unwrap_err(),
        StoreError::NotFound {
            entity: EntityKind::Student,
            id: 2
        }
    );
    // Aggregates reflect the cascade
    assert_eq!(store.highest_score(1).unwrap(), 31);
    assert_eq!(store.average_score(1).unwrap(), 21.0);
}

#[test]
fn test_repeated_resubmission_counts() {
    let store = populated_store(1, 2);
    let n = 25;
    for i in 0..n {
        store.submit_result(TestResult::new(1, 1, i)).unwrap();
    }
    store.submit_result(TestResult::new(1, 2, 5)).unwrap();

    let results = store.results_by_student(1).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], TestResult::new(1, 1, n - 1));

    let taken = store.get_student(1).unwrap().tests_taken;
    assert_eq!(taken.iter().filter(|&&t| t == 1).count(), n as usize);
    assert_eq!(taken.last(), Some(&2));
}

#[test]
fn test_failed_operations_leave_store_unchanged() {
    let store = populated_store(2, 1);
    store.submit_result(TestResult::new(1, 1, 50)).unwrap();
    let students_before = store.list_students();
    let tests_before = store.list_tests();
    let results_before = store.results_by_test(1).unwrap();

    assert!(store.create_student(Student::new(1, "Dup", "d@x.com")).is_err());
    assert!(store.create_test(Test::new(1, "Dup", 1)).is_err());
    assert!(store.submit_result(TestResult::new(9, 1, 10)).is_err());
    assert!(store.submit_result(TestResult::new(1, 9, 10)).is_err());
    assert!(store.submit_result(TestResult::new(2, 1, 101)).is_err());
    assert!(store.delete_student(9).is_err());

    assert_eq!(store.list_students(), students_before);
    assert_eq!(store.list_tests(), tests_before);
    assert_eq!(store.results_by_test(1).unwrap(), results_before);
}

#[test]
fn test_entities_round_trip_wire_schema() {
    let student: Student =
        serde_json::from_str(r#"{"id": 3, "name": "Ana", "email": "a@x.com"}"#).unwrap();
    assert!(student.tests_taken.is_empty());
    assert!(student.validate().is_ok());

    let json = serde_json::to_value(TestResult::new(1, 2, 3)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"student_id": 1, "test_id": 2, "score": 3})
    );

    let test: Test =
        serde_json::from_str(r#"{"id": 1, "name": "Q", "max_score": 10}"#).unwrap();
    let err = test.validate().unwrap_err();
    assert_eq!(err.field, "name");
    assert_eq!(validation::TEST_NAME_MIN, 2);
}
