//! Type definitions module
//!
//! - `response` - Dispatch endpoint response body and health checks

pub mod response;

pub use response::{DispatchResponse, HealthResponse, HealthStatus};
