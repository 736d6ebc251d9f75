//! Fixtures for database rows and identity provider endpoints.
//!
//! - `factory` - Deterministic values for generated words and provider profiles
//! - `identity` - Mock identity provider endpoints
//! - `word` - Part of speech and word rows

pub mod factory;
pub mod identity;
pub mod word;
