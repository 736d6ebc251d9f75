use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        profile::{LoginDto, TokenDto},
        session::{token_cookie, token_removal_cookie},
    },
    server::{error::Error, model::app::AppState, service::auth::AuthService},
};

pub static AUTH_TAG: &str = "auth";

/// Logs in with a public identity provider username
///
/// Looks up the username with the identity provider and returns a signed session token for
/// the matching identity. The token is also set as the `token` cookie, valid for one day.
///
/// # Responses
/// - 200 (Success): Username resolved, session token returned
/// - 4xx/5xx (Provider status): The identity provider rejected the username, `{message}` holds
///   the provider's reason
/// - 400 (Bad Request): The identity provider could not be reached
/// - 500 (Internal Server Error): The session token could not be signed
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Session token for the username", body = TokenDto),
        (status = 400, description = "Identity provider unreachable", body = MessageDto),
        (status = 404, description = "Unknown username", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(login): Json<LoginDto>,
) -> Result<Response, Error> {
    let auth_service = AuthService::new(&state.identity, &state.token_codec);

    let token = match auth_service.login(&login.username).await {
        Ok(token) => token,
        Err(Error::IdentityError(err)) => {
            let (status, message) = err.status_and_message();

            return Ok((status, Json(MessageDto { message })).into_response());
        }
        Err(err) => return Err(err),
    };

    let cookie = token_cookie(&token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie.to_string())],
        Json(TokenDto { token }),
    )
        .into_response())
}

/// Logs out by clearing the session cookie
///
/// # Responses
/// - 307 (Temporary Redirect): Session cookie removed, redirect to the home page
#[utoipa::path(
    get,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cookie cleared, redirect to home page")
    ),
)]
pub async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, token_removal_cookie().to_string())],
        Redirect::temporary("/"),
    )
}
