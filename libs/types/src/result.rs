//! Response models

use serde::{Deserialize, Serialize};

/// Outcome of a single calculation, serialized as `{"result": ...}`.
///
/// `T` is `i32` for the integer operations and `f64` for division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub result: T,
}

impl<T> OperationResult<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

impl<T> From<T> for OperationResult<T> {
    fn from(result: T) -> Self {
        Self::new(result)
    }
}

/// Server wall-clock time, formatted `yyyy-MM-dd HH:mm:ss`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTime {
    pub time: String,
}
