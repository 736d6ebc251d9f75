//! Error types for the word list server.
//!
//! Each domain (authentication, configuration, identity provider, routing) has its own error
//! enum implementing `IntoResponse`, aggregated into [`Error`] so handlers can use `?` across
//! every layer. Errors without a dedicated mapping become a logged 500.

pub mod auth;
pub mod config;
pub mod identity;
pub mod route;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, identity::IdentityError, route::RouteError,
    },
};

/// Main error type for the word list server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (missing or unverifiable session token)
/// - Identity provider errors (upstream failures, transport errors)
/// - Routing errors (unmatched word list sub-routes)
/// - External library errors (database, token signing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error, always surfaced as a 401 payload.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Identity provider lookup failed.
    #[error(transparent)]
    IdentityError(#[from] IdentityError),
    /// Request path did not match any known route.
    #[error(transparent)]
    RouteError(#[from] RouteError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token signing error.
    #[error(transparent)]
    TokenError(#[from] jsonwebtoken::errors::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - Missing or invalid token
/// - 404 Not Found - Unknown word list route
/// - Upstream status - Identity provider rejected the lookup
/// - 400 Bad Request - Identity provider could not be reached
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::IdentityError(err) => err.into_response(),
            Self::RouteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message so that no
/// implementation details reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
