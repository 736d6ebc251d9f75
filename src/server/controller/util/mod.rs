//! Request extractors and middleware shared by the controllers.

pub mod guard;
pub mod identity;
