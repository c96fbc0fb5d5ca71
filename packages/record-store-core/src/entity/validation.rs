//! Field validation for incoming entities.
//!
//! The store assumes well-formed names. Transports call
//! [`Student::validate`](super::Student::validate) and
//! [`Test::validate`](super::Test::validate) before handing a value over.

use crate::error::{EntityKind, ValidationError};

/// Minimum student name length in characters.
pub const STUDENT_NAME_MIN: usize = 2;
/// Maximum student name length in characters.
pub const STUDENT_NAME_MAX: usize = 50;
/// Minimum test name length in characters.
pub const TEST_NAME_MIN: usize = 2;
/// Maximum test name length in characters.
pub const TEST_NAME_MAX: usize = 100;

/// Validates that a string field has between `min` and `max` characters.
///
/// # Arguments
/// * `entity` - Entity the field belongs to
/// * `field` - Field name used in the error
/// * `value` - Field value
/// * `min` - Inclusive lower bound
/// * `max` - Inclusive upper bound
///
/// # Returns
/// `Result<(), ValidationError>` indicating success or validation failure.
pub(crate) fn validate_length(
    entity: EntityKind,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        return Err(ValidationError {
            entity,
            field,
            message: format!("must have at least {} characters, got {}", min, len),
        });
    }
    if len > max {
        return Err(ValidationError {
            entity,
            field,
            message: format!("must have at most {} characters, got {}", max, len),
        });
    }
    Ok(())
}
