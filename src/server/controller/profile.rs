use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, StatusErrorDto},
    server::{
        controller::util::identity::AuthenticatedIdentity, error::Error, model::app::AppState,
        service::profile::ProfileService,
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Returns the identity provider profile of the logged in user
///
/// The provider's fields are returned as-is under `data`, with the avatar additionally
/// exposed as `avatarUrl`.
///
/// # Responses
/// - 200 (Success): `{data: {avatarUrl, ...providerFields}}`
/// - 401 (Unauthorized): Missing or invalid `Authorization` token
/// - 4xx/5xx (Provider status): The identity provider rejected the lookup
/// - 400 (Bad Request): The identity provider could not be reached
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Identity provider profile"),
        (status = 400, description = "Identity provider unreachable", body = StatusErrorDto),
        (status = 401, description = "Missing or invalid session token", body = StatusErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    AuthenticatedIdentity(identity_id): AuthenticatedIdentity,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let profile = ProfileService::new(&state.identity)
        .get_profile(identity_id)
        .await?;

    Ok(Json(profile))
}
