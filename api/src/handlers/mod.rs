//! Response mapping shared by route handlers

pub mod error;

pub use error::{error_response, panic_message};
