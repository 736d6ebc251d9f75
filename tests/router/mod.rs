//! Tests driving the assembled API router.

mod guard;
mod profile;
mod wordlist;
