//! Request models
//!
//! Field names are lowerCamelCase on the wire. PascalCase spellings are
//! accepted as aliases on input.

use serde::{Deserialize, Serialize};

/// Lower bound used when a range request omits `min`
pub const DEFAULT_MIN: i32 = 0;

/// Upper bound used when a range request omits `max`
pub const DEFAULT_MAX: i32 = 100;

/// Two integer operands for add, subtract, multiply and divide.
///
/// Both fields are required; a body missing either one fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryOperationRequest {
    #[serde(alias = "Value1")]
    pub value1: i32,
    #[serde(alias = "Value2")]
    pub value2: i32,
}

impl BinaryOperationRequest {
    pub fn new(value1: i32, value2: i32) -> Self {
        Self { value1, value2 }
    }
}

/// Bounds for random generation: `min` inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRequest {
    #[serde(default = "default_min", alias = "Min")]
    pub min: i32,
    #[serde(default = "default_max", alias = "Max")]
    pub max: i32,
}

impl RangeRequest {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl Default for RangeRequest {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

fn default_min() -> i32 {
    DEFAULT_MIN
}

fn default_max() -> i32 {
    DEFAULT_MAX
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_binary_request_serde_roundtrip(value1 in any::<i32>(), value2 in any::<i32>()) {
            let req = BinaryOperationRequest::new(value1, value2);
            let body = serde_json::to_string(&req).unwrap();
            let back: BinaryOperationRequest = serde_json::from_str(&body).unwrap();
            prop_assert_eq!(back, req);
        }

        #[test]
        fn prop_range_request_serde_roundtrip(min in any::<i32>(), max in any::<i32>()) {
            let req = RangeRequest::new(min, max);
            let body = serde_json::to_string(&req).unwrap();
            let back: RangeRequest = serde_json::from_str(&body).unwrap();
            prop_assert_eq!(back, req);
        }

        #[test]
        fn prop_range_request_missing_max_defaults(min in any::<i32>()) {
            let body = format!(r#"{{"min": {min}}}"#);
            let req: RangeRequest = serde_json::from_str(&body).unwrap();
            prop_assert_eq!(req, RangeRequest::new(min, DEFAULT_MAX));
        }
    }
}
