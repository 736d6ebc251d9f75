use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use wordlist_test_utils::prelude::*;

use crate::util::{app, body_json, issue_token};

const IDENTITY_ID: i64 = 583231;

fn get_profile(token: Option<&str>) -> Request<Body> {
    let mut request = Request::get("/api/profile");
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, token);
    }

    request.body(Body::empty()).unwrap()
}

#[tokio::test]
/// Expect 401 without contacting the provider when the Authorization header is missing
async fn missing_token_is_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_profile_endpoint(IDENTITY_ID, 0)
        .build()
        .await?;

    let response = app(&test).oneshot(get_profile(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "statusCode": 401, "error": "Unauthorized" })
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 without contacting the provider when the token signature was altered
async fn tampered_token_is_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_profile_endpoint(IDENTITY_ID, 0)
        .build()
        .await?;
    let token = issue_token(IDENTITY_ID);
    let signature_start = token.rfind('.').unwrap() + 1;
    let flipped = if token[signature_start..].starts_with('A') { "B" } else { "A" };
    let token = format!(
        "{}{}{}",
        &token[..signature_start],
        flipped,
        &token[signature_start + 1..]
    );

    let response = app(&test).oneshot(get_profile(Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "statusCode": 401, "error": "Unauthorized" })
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a valid token to reach the provider lookup of its identity
async fn valid_token_returns_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_profile_endpoint(IDENTITY_ID, 1)
        .build()
        .await?;

    let response = app(&test)
        .oneshot(get_profile(Some(&issue_token(IDENTITY_ID))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"]["login"],
        factory::PROFILE_LOGIN
    );
    test.assert_mocks();

    Ok(())
}
