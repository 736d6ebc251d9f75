//! SeaORM entity models for the word list schema.

pub mod prelude;

pub mod members;
pub mod roles;
pub mod types;
pub mod words;
