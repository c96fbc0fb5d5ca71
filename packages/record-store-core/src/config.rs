//! Store configuration.

/// Record store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Initial capacity of the student collection
    pub initial_student_capacity: usize,
    /// Initial capacity of the test collection
    pub initial_test_capacity: usize,
    /// Initial capacity of the result collection
    pub initial_result_capacity: usize,
    /// Request body read timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_student_capacity: 256,
            initial_test_capacity: 64,
            initial_result_capacity: 1024,
            request_timeout_ms: 5000, // 5 seconds default
        }
    }
}
