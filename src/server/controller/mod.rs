//! HTTP controller endpoints for the word list API.
//!
//! Axum handlers for login/logout, the identity profile and the paginated word list.
//! Controllers authenticate the request, delegate to a service, and shape the HTTP response.
//! Every handler is annotated for utoipa so it appears in the OpenAPI document.

pub mod auth;
pub mod profile;
pub mod util;
pub mod wordlist;
