use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// Identity id of a request carrying a valid session token in its `Authorization` header
///
/// Rejects with [`AuthError::MissingAuthorization`] when the header is absent and
/// [`AuthError::InvalidToken`] when the token does not verify. Both render as a 401.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedIdentity(pub i64);

impl FromRequestParts<AppState> for AuthenticatedIdentity {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
            return Err(AuthError::MissingAuthorization.into());
        };

        let token = value.to_str().map_err(|_| AuthError::InvalidToken)?;

        match state.token_codec.verify(token) {
            Some(identity_id) => Ok(AuthenticatedIdentity(identity_id)),
            None => Err(AuthError::InvalidToken.into()),
        }
    }
}
