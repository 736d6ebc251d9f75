//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries behind small typed methods and borrow a connection for the
//! duration of a request.

pub mod word;
