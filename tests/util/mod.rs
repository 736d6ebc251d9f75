//! Helpers shared by the integration tests.

use axum::{body::Body, http::Response, Router};
use serde_json::Value;
use wordlist::server::{model::app::AppState, router, service::token::TokenCodec};
use wordlist_test_utils::prelude::*;

/// API router backed by the test context's database and mock identity provider
pub fn app(test: &TestContext) -> Router {
    let state: AppState = test.to_app_state();

    router::routes().with_state(state)
}

/// Session token signed with the test secret
pub fn issue_token(identity_id: i64) -> String {
    TokenCodec::new(TEST_AUTH_SECRET)
        .issue(identity_id)
        .expect("token signs with test secret")
}

/// Collects a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body is readable");

    serde_json::from_slice(&bytes).expect("response body is JSON")
}
