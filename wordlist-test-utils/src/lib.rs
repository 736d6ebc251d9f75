//! Test utilities for the word list server.
//!
//! Tests describe their environment with [`TestBuilder`] (tables, seeded parts of speech,
//! words, mocked identity provider endpoints) and receive a [`TestContext`] holding an
//! in-memory SQLite database and the mock provider.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::TEST_AUTH_SECRET, fixtures::factory, TestBuilder, TestContext, TestError,
    };
}
