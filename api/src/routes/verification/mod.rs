//! Verification email routes

pub mod test_email;

pub use test_email::{test_email_verification, AppState};
