use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower::ServiceExt;
use wordlist::server::controller::util::guard::require_session_cookie;
use wordlist_test_utils::prelude::*;

use crate::util::app;

/// API router merged with stand-in pages behind the session guard
fn guarded_app(test: &TestContext) -> Router {
    let pages = Router::new()
        .route("/", get(|| async { "home" }))
        .route("/wordlist/{page}", get(|| async { "wordlist" }))
        .route("/profile", get(|| async { "profile" }));

    pages
        .merge(app(test))
        .layer(middleware::from_fn(require_session_cookie))
}

#[tokio::test]
/// Expect protected pages without a token cookie to redirect home
async fn redirects_protected_pages() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    for path in ["/wordlist/1", "/profile"] {
        let request = Request::get(path).body(Body::empty()).unwrap();

        let response = guarded_app(&test).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND, "path {}", path);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    Ok(())
}

#[tokio::test]
/// Expect protected pages to render with a token cookie
async fn renders_with_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let request = Request::get("/profile")
        .header(header::COOKIE, "token=abc; paginationLimit=10")
        .body(Body::empty())
        .unwrap();

    let response = guarded_app(&test).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect API routes to be answered by the API, not redirected
async fn api_is_not_redirected() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let request = Request::get("/api/wordlist/readAny/1/5")
        .body(Body::empty())
        .unwrap();

    let response = guarded_app(&test).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
