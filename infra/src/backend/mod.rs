//! Backend Service Module
//!
//! Client for the Supabase project that generates verification codes and
//! hosts the email-sending Edge Function.
//!
//! ## Endpoints
//!
//! - `POST {url}/rest/v1/rpc/generate_verification_code` - code generation
//! - `POST {url}/functions/v1/send-verification-email` - email dispatch

pub mod supabase;

pub use supabase::{SupabaseBackend, GENERATE_CODE_RPC};

#[cfg(test)]
mod tests;
