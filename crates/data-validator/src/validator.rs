//! Request Validation Pipeline
//!
//! Presence is checked for every field before any value is converted, so a
//! missing field always wins over a malformed one.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationError;
use crate::normalizer::{normalize_category, normalize_company};
use crate::record::{CarRecord, Field};
use crate::shape::{decode_body, InputShape};

/// Validate raw body bytes into a [`CarRecord`]
pub fn validate_body(body: &[u8]) -> Result<CarRecord, ValidationError> {
    validate_value(decode_body(body)?)
}

/// Validate an already decoded JSON value into a [`CarRecord`]
pub fn validate_value(value: Value) -> Result<CarRecord, ValidationError> {
    let shape = InputShape::classify(value);
    if matches!(shape, InputShape::Wrapped(_)) {
        debug!("Unwrapping request object from list");
    }
    let object = shape.into_object()?;
    check_required(&object)?;
    build_record(&object)
}

/// Fail on the first absent, null, or blank field
pub fn check_required(object: &Map<String, Value>) -> Result<(), ValidationError> {
    for field in Field::ALL {
        let present = match object.get(field.as_str()) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        };
        if !present {
            return Err(ValidationError::MissingField(field.as_str()));
        }
    }
    Ok(())
}

fn build_record(object: &Map<String, Value>) -> Result<CarRecord, ValidationError> {
    Ok(CarRecord {
        company: normalize_company(text(object, Field::Company)?),
        year: integer(object, Field::Year)?,
        km_driven: integer(object, Field::KmDriven)?,
        fuel: normalize_category(text(object, Field::Fuel)?),
        transmission: normalize_category(text(object, Field::Transmission)?),
        owner: normalize_category(text(object, Field::Owner)?),
        seller_type: normalize_category(text(object, Field::SellerType)?),
        seats: integer(object, Field::Seats)?,
    })
}

fn text(object: &Map<String, Value>, field: Field) -> Result<&str, ValidationError> {
    match object.get(field.as_str()) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::Coercion {
            field: field.as_str(),
            expected: "a string",
        }),
        None => Err(ValidationError::MissingField(field.as_str())),
    }
}

fn integer(object: &Map<String, Value>, field: Field) -> Result<i64, ValidationError> {
    let value = object
        .get(field.as_str())
        .ok_or(ValidationError::MissingField(field.as_str()))?;
    coerce_integer(value).ok_or(ValidationError::Coercion {
        field: field.as_str(),
        expected: "an integer",
    })
}

/// Convert an integer-like JSON value.
///
/// Integers pass through, finite floats truncate toward zero, and strings are
/// parsed after trimming. Booleans are rejected.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?;
            let truncated = f.trunc();
            // i64::MAX is not exactly representable; compare against 2^63
            const BOUND: f64 = 9.223_372_036_854_775_808e18;
            if f.is_finite() && (-BOUND..BOUND).contains(&truncated) {
                Some(truncated as i64)
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
