//! Unit tests for the dispatch service
