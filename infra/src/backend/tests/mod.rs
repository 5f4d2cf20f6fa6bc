//! Unit tests for the backend module

#[cfg(test)]
pub mod supabase_tests;
