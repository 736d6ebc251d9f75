use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use wordlist::{
    model::profile::LoginDto,
    server::{
        controller::auth::{login, logout},
        model::app::AppState,
        service::token::TokenCodec,
    },
};
use wordlist_test_utils::prelude::*;

use crate::util::body_json;

mod login {
    use super::*;

    fn login_body(username: &str) -> Json<LoginDto> {
        Json(LoginDto {
            username: username.to_string(),
        })
    }

    #[tokio::test]
    /// Expect a token for the provider's id and the token cookie to be set
    async fn returns_token_and_sets_cookie() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_endpoint("octocat", 583231, 1)
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let response = login(State(state), login_body("octocat"))
            .await
            .expect("login succeeds");

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("token="));
        assert!(cookie.contains("Max-Age=86400"));

        let body = body_json(response).await;
        let token = body["token"].as_str().unwrap();
        assert_eq!(TokenCodec::new(TEST_AUTH_SECRET).verify(token), Some(583231));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect the provider's status and reason as `{message}` for unknown usernames
    async fn unknown_username_returns_provider_status() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_error_endpoint("ghost", 404, 1)
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let response = login(State(state), login_body("ghost"))
            .await
            .expect("provider failures are answered, not raised");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body = body_json(response).await;
        assert_eq!(body["message"], "Not Found");
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a 400 `{message}` when the provider cannot be reached
    async fn unreachable_provider_returns_bad_request() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let state = AppState::from((
            test.db.clone(),
            "http://127.0.0.1:1".to_string(),
            TEST_AUTH_SECRET.to_string(),
        ));

        let response = login(State(state), login_body("octocat"))
            .await
            .expect("transport failures are answered, not raised");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["message"].is_string());

        Ok(())
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    /// Expect a redirect home which expires the token cookie
    async fn clears_cookie_and_redirects() {
        let response = logout().await.into_response();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("token="));
        assert!(cookie.contains("Max-Age=0"));
    }
}
