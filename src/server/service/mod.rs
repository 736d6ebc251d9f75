//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the repositories or the identity provider
//! client, combining them into the operations exposed by the API.

pub mod auth;
pub mod identity;
pub mod profile;
pub mod token;
pub mod wordlist;
