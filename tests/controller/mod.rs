//! Tests for HTTP controller endpoints called directly.

mod auth;
mod profile;
