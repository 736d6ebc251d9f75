use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::StatusErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header missing")]
    MissingAuthorization,
    #[error("Session token failed verification")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication error: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(StatusErrorDto {
                status_code: StatusCode::UNAUTHORIZED.as_u16(),
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
