//! Server application core modules.
//!
//! This module contains all server-side functionality of the word list application: HTTP
//! routing, token-based authentication, identity provider lookups, and the paginated word
//! list queries against the relational store.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
