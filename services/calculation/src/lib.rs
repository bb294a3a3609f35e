//! Calculation API
//!
//! Arithmetic (add, subtract, multiply, divide) and random numbers over
//! JSON/HTTP, plus two informational endpoints.

pub mod calculator;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::AppError;
pub use router::create_router;
