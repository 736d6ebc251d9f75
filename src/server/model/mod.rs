//! Server application models and type definitions.
//!
//! Application state shared by every handler and the request-side view of the cookie session.

pub mod app;
pub mod session;
