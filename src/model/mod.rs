//! Models shared by the browser client and the server.
//!
//! DTOs here define the JSON contract of the API. `session` and `table` hold the
//! cookie handling and page-local table logic the client runs, kept free of any
//! browser dependency so they can be unit tested natively.

pub mod api;
pub mod profile;
pub mod session;
pub mod table;
pub mod wordlist;
