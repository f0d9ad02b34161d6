//! Request Validation and Normalization
//!
//! Turns loosely-typed car listing input into a well-typed [`CarRecord`]
//! ready for price prediction.

mod error;
mod normalizer;
mod record;
mod shape;
mod validator;

pub use error::ValidationError;
pub use normalizer::{normalize_category, normalize_company};
pub use record::{CarRecord, Field};
pub use shape::{decode_body, InputShape};
pub use validator::{check_required, coerce_integer, validate_body, validate_value};
