use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::StatusErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum IdentityError {
    /// Provider answered with a non-success status
    #[error("Identity provider responded with {status}: {message}")]
    Upstream { status: StatusCode, message: String },
    /// Provider could not be reached or returned an unreadable body
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// Provider base URL cannot carry path segments
    #[error("Identity provider URL {0:?} cannot be used as a base URL")]
    InvalidBaseUrl(String),
}

impl IdentityError {
    /// Status and message to hand back to the caller
    ///
    /// Upstream failures keep the provider's status, transport failures become a 400.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Upstream { status, message } => (*status, message.clone()),
            other => (StatusCode::BAD_REQUEST, other.to_string()),
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        if let Self::InvalidBaseUrl(_) = self {
            return InternalServerError(self).into_response();
        }

        tracing::warn!("{}", self);

        let (status, message) = self.status_and_message();

        (
            status,
            Json(StatusErrorDto {
                status_code: status.as_u16(),
                error: message,
            }),
        )
            .into_response()
    }
}
