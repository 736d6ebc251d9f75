pub mod api;
pub mod cookie;
