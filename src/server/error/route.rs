use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Invalid route: {0:?}")]
    InvalidRoute(String),
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Invalid route".to_string(),
            }),
        )
            .into_response()
    }
}
