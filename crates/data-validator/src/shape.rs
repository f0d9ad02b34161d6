//! Request Body Shape Decoding
//!
//! Clients send either a bare object or an array wrapping one. Both are
//! resolved to a single object before any field is looked at.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Decoded top-level shape of a prediction request
#[derive(Debug, Clone, PartialEq)]
pub enum InputShape {
    /// Body is the object itself
    Single(Map<String, Value>),
    /// Body is an array; holds its first element
    Wrapped(Map<String, Value>),
    /// Anything that cannot yield an object
    Invalid(ValidationError),
}

impl InputShape {
    /// Classify a decoded JSON value
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Object(map) => InputShape::Single(map),
            Value::Array(items) => match items.into_iter().next() {
                Some(Value::Object(map)) => InputShape::Wrapped(map),
                Some(_) => InputShape::Invalid(ValidationError::NotAnObject),
                None => InputShape::Invalid(ValidationError::EmptyList),
            },
            _ => InputShape::Invalid(ValidationError::NotAnObject),
        }
    }

    /// Resolve to the request object
    pub fn into_object(self) -> Result<Map<String, Value>, ValidationError> {
        match self {
            InputShape::Single(map) | InputShape::Wrapped(map) => Ok(map),
            InputShape::Invalid(err) => Err(err),
        }
    }
}

/// Decode raw body bytes into JSON
pub fn decode_body(body: &[u8]) -> Result<Value, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::EmptyBody);
    }
    serde_json::from_slice(body).map_err(|_| ValidationError::InvalidJson)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_is_single() {
        let shape = InputShape::classify(json!({"Company": "Audi"}));
        assert!(matches!(shape, InputShape::Single(_)));
    }

    #[test]
    fn test_array_takes_first_element() {
        let shape = InputShape::classify(json!([{"Company": "Audi"}, {"Company": "Kia"}]));
        let map = shape.into_object().unwrap();
        assert_eq!(map["Company"], "Audi");
    }

    #[test]
    fn test_empty_array() {
        let shape = InputShape::classify(json!([]));
        assert_eq!(shape.into_object().unwrap_err(), ValidationError::EmptyList);
    }

    #[test]
    fn test_non_object_shapes() {
        for value in [json!(42), json!("text"), json!(null), json!(true), json!([1, 2])] {
            assert_eq!(
                InputShape::classify(value).into_object().unwrap_err(),
                ValidationError::NotAnObject
            );
        }
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(b"").unwrap_err(), ValidationError::EmptyBody);
        assert_eq!(decode_body(b"  \n").unwrap_err(), ValidationError::EmptyBody);
        assert_eq!(decode_body(b"{not json").unwrap_err(), ValidationError::InvalidJson);
        assert_eq!(decode_body(b"{}").unwrap(), json!({}));
    }
}
