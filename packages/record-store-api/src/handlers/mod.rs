//! HTTP endpoint implementations for students, tests and results.

pub mod request_utils;
pub mod response;
pub mod result_handlers;
pub mod student_handlers;
pub mod test_handlers;

pub use response::{error_response, success_response, ApiError, ApiResponse, ErrorResponse};
pub use result_handlers::{
    student_results, submit_result, test_average, test_highest, test_results,
};
pub use student_handlers::{create_student, delete_student, get_student, list_students};
pub use test_handlers::{create_test, get_test, list_tests};
