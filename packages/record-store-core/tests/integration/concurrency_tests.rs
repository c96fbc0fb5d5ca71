//! Concurrent access tests.
//!
//! Compound operations must never be observed half-applied.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use ntest::timeout;
use record_store_core::{EntityKind, RecordStore, Student, StoreError, TestResult};

use super::helpers::populated_store;

#[test]
#[timeout(10000)]
fn test_parallel_submissions_are_all_recorded() {
    let store = Arc::new(populated_store(8, 4));
    let handles: Vec<_> = (1..=8)
        .map(|student_id| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for round in 0..50 {
                    for test_id in 1..=4 {
                        store
                            .submit_result(TestResult::new(student_id, test_id, round))
                            .unwrap();
                    }
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.result_count(), 32);
    for student in store.list_students() {
        assert_eq!(student.tests_taken.len(), 200);
    }
    for test_id in 1..=4 {
        assert_eq!(store.highest_score(test_id).unwrap(), 49);
        assert_eq!(store.average_score(test_id).unwrap(), 49.0);
    }
}

#[test]
#[timeout(10000)]
fn test_duplicate_create_race_has_one_winner() {
    let store = Arc::new(RecordStore::new());
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store.create_student(Student::new(1, format!("S{}", i), "s@x.com"))
            })
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = outcomes.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    assert!(outcomes
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, StoreError::Conflict { id: 1, .. })));
    assert_eq!(store.student_count(), 1);
}

/// At most one student (and so at most one result) is live at any time,
/// so a reader observing more than one result has seen a partial cascade.
#[test]
#[timeout(20000)]
fn test_delete_cascade_is_atomic_for_readers() {
    let store = Arc::new(populated_store(0, 1));
    let done = Arc::new(AtomicBool::new(false));

    let reader = {
        let store = Arc::clone(&store);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut observations = 0u64;
            while !done.load(Ordering::Acquire) {
                let results = store.results_by_test(1).unwrap();
                assert!(results.len() <= 1, "stale results: {:?}", results);
                for r in &results {
                    assert_eq!(r.score, r.student_id % 100);
                }
                observations += 1;
            }
            observations
        })
    };

    for id in 1..=200 {
        store
            .create_student(Student::new(id, format!("S{}", id), "s@x.com"))
            .unwrap();
        store.submit_result(TestResult::new(id, 1, id % 100)).unwrap();
        store.delete_student(id).unwrap();

        assert_eq!(
            store.results_by_student(id).unwrap_err(),
            StoreError::NotFound {
                entity: EntityKind::Student,
                id
            }
        );
    }
    done.store(true, Ordering::Release);
    let _observations = reader.join().unwrap();

    assert_eq!(store.result_count(), 0);
    assert!(store.results_by_test(1).unwrap().is_empty());
}

/// A submission either fully lands (result stored and test appended)
/// or not at all, even while the owning student is being deleted.
#[test]
#[timeout(20000)]
fn test_submit_and_delete_race() {
    for id in 1..=100 {
        let store = Arc::new(populated_store(0, 1));
        store
            .create_student(Student::new(id, "Racer", "r@x.com"))
            .unwrap();

        let submitter = {
            let store = Arc::clone(&store);
            thread::spawn(move || store.submit_result(TestResult::new(id, 1, 10)))
        };
        let deleter = {
            let store = Arc::clone(&store);
            thread::spawn(move || store.delete_student(id))
        };

        let submitted = submitter.join().unwrap();
        deleter.join().unwrap().unwrap();

        match submitted {
            Ok(()) | Err(StoreError::NotFound { .. }) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }
        // Whichever ran first, the cascade leaves no orphan behind
        assert_eq!(store.result_count(), 0);
        assert_eq!(store.student_count(), 0);
    }
}
