use axum::{extract::State, http::StatusCode, response::IntoResponse};
use wordlist::server::{
    controller::{profile::get_profile, util::identity::AuthenticatedIdentity},
    model::app::AppState,
};
use wordlist_test_utils::prelude::*;

use crate::util::body_json;

#[tokio::test]
/// Expect the provider profile with the avatar in camel case
async fn returns_profile_of_identity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_profile_endpoint(583231, 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let response = get_profile(AuthenticatedIdentity(583231), State(state))
        .await
        .expect("profile lookup succeeds")
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["avatarUrl"], factory::PROFILE_AVATAR_URL);
    assert_eq!(body["data"]["avatar_url"], factory::PROFILE_AVATAR_URL);
    assert_eq!(body["data"]["login"], factory::PROFILE_LOGIN);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the provider's status and reason when the lookup fails
async fn passes_provider_error_through() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_profile_error_endpoint(583231, 403, 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let result = get_profile(AuthenticatedIdentity(583231), State(state)).await;

    let response = match result {
        Ok(_) => panic!("expected the provider error"),
        Err(e) => e.into_response(),
    };
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["statusCode"], 403);
    assert_eq!(body["error"], "Forbidden");

    Ok(())
}
