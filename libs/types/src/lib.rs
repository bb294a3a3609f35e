//! Types library for the calculation API
//!
//! Transport-neutral models shared by the calculation service and its tests.
//!
//! # Modules
//! - `requests`: Request bodies (BinaryOperationRequest, RangeRequest)
//! - `result`: Response bodies (OperationResult, ServerTime)
//! - `errors`: Error taxonomy

pub mod requests;
pub mod result;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::requests::*;
    pub use crate::result::*;
    pub use crate::errors::*;
}
