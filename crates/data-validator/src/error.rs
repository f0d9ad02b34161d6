//! Validation Error Types

use thiserror::Error;

/// Errors raised while turning a raw request body into a [`CarRecord`](crate::CarRecord)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Request carried no body at all
    #[error("request body is missing")]
    EmptyBody,

    /// Body could not be decoded as JSON
    #[error("invalid JSON data received")]
    InvalidJson,

    /// Body was a JSON array with no elements
    #[error("received an empty list of data")]
    EmptyList,

    /// Body (or its first element) was not a JSON object
    #[error("expected a JSON object or a list containing one")]
    NotAnObject,

    /// Required field absent, null, or blank
    #[error("missing or empty field: {0}")]
    MissingField(&'static str),

    /// Field present but not convertible to the expected type
    #[error("could not process field {field}: expected {expected}")]
    Coercion {
        field: &'static str,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Whether the error stems from the overall body shape rather than a field
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            ValidationError::EmptyBody
                | ValidationError::InvalidJson
                | ValidationError::EmptyList
                | ValidationError::NotAnObject
        )
    }
}
