use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use wordlist_test_utils::prelude::*;

use crate::util::{app, body_json, issue_token};

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut request = Request::get(path);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, token);
    }

    request.body(Body::empty()).unwrap()
}

async fn wordlist_test() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_wordlist_tables()
        .with_seeded_types()
        .with_words(12)
        .build()
        .await
}

mod authentication {
    use super::*;

    #[tokio::test]
    /// Expect 401 for every word list path when the Authorization header is missing
    async fn unauthorized_regardless_of_path() -> Result<(), TestError> {
        let test = wordlist_test().await?;

        for path in [
            "/api/wordlist",
            "/api/wordlist/",
            "/api/wordlist/readAny/1/5",
            "/api/wordlist/readOne/1",
            "/api/wordlist/not/a/route",
        ] {
            let response = app(&test).oneshot(get(path, None)).await.unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "path {}", path);
            assert_eq!(
                body_json(response).await,
                json!({ "statusCode": 401, "error": "Unauthorized" })
            );
        }

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 when the token does not verify
    async fn rejects_invalid_token() -> Result<(), TestError> {
        let test = wordlist_test().await?;

        let response = app(&test)
            .oneshot(get("/api/wordlist/readAny/1/5", Some("not-a-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    /// Expect tokens signed with another secret to be rejected
    async fn rejects_foreign_token() -> Result<(), TestError> {
        let test = wordlist_test().await?;
        let foreign = wordlist::server::service::token::TokenCodec::new("another_secret")
            .issue(1)
            .unwrap();

        let response = app(&test)
            .oneshot(get("/api/wordlist/readAny/1/5", Some(&foreign)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod routes {
    use super::*;

    #[tokio::test]
    /// Expect 404 for unknown routes once authenticated
    async fn invalid_route_not_found() -> Result<(), TestError> {
        let test = wordlist_test().await?;
        let token = issue_token(1);

        for path in [
            "/api/wordlist",
            "/api/wordlist/readAll/1/5",
            "/api/wordlist/readAny/one/5",
            "/api/wordlist/readAny/1/5/6",
            "/api/wordlist/readAny/99999999999999999999/5",
        ] {
            let response = app(&test).oneshot(get(path, Some(&token))).await.unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {}", path);
            assert_eq!(body_json(response).await, json!({ "error": "Invalid route" }));
        }

        Ok(())
    }

    #[tokio::test]
    /// Expect the last partial page with pagination metadata
    async fn read_any_returns_page() -> Result<(), TestError> {
        let test = wordlist_test().await?;

        let response = app(&test)
            .oneshot(get("/api/wordlist/readAny/3/5", Some(&issue_token(1))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["page"], 3);
        assert_eq!(body["pageCount"], 3);
        assert_eq!(body["rowsPerPage"], 5);
        assert_eq!(body["totalRows"], 12);
        assert_eq!(
            body["rows"],
            json!([
                { "id": 11, "word": factory::word_text(11), "type": factory::type_name_for(11) },
                { "id": 12, "word": factory::word_text(12), "type": factory::type_name_for(12) },
            ])
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect a bearer-prefixed token to be accepted
    async fn read_any_accepts_bearer_token() -> Result<(), TestError> {
        let test = wordlist_test().await?;
        let token = format!("Bearer {}", issue_token(1));

        let response = app(&test)
            .oneshot(get("/api/wordlist/readAny/1", Some(&token)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["rowsPerPage"], 5);
        assert_eq!(body["rows"].as_array().unwrap().len(), 5);

        Ok(())
    }

    #[tokio::test]
    /// Expect page 0 to answer exactly like page 1
    async fn page_zero_matches_page_one() -> Result<(), TestError> {
        let test = wordlist_test().await?;
        let token = issue_token(1);

        let zero = app(&test)
            .oneshot(get("/api/wordlist/readAny/0/5", Some(&token)))
            .await
            .unwrap();
        let one = app(&test)
            .oneshot(get("/api/wordlist/readAny/1/5", Some(&token)))
            .await
            .unwrap();

        assert_eq!(zero.status(), StatusCode::OK);
        assert_eq!(body_json(zero).await, body_json(one).await);

        Ok(())
    }

    #[tokio::test]
    /// Expect an empty first page when the word table is empty
    async fn read_any_empty_table() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_wordlist_tables()
            .with_seeded_types()
            .build()
            .await?;

        let response = app(&test)
            .oneshot(get("/api/wordlist/readAny/1/5", Some(&issue_token(1))))
            .await
            .unwrap();

        assert_eq!(
            body_json(response).await,
            json!({ "rows": [], "pageCount": 0, "page": 1, "rowsPerPage": 5, "totalRows": 0 })
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect the detail route to echo the id
    async fn read_one_echoes_id() -> Result<(), TestError> {
        let test = wordlist_test().await?;

        let response = app(&test)
            .oneshot(get("/api/wordlist/readOne/7", Some(&issue_token(1))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "id": 7 }));

        Ok(())
    }

    #[tokio::test]
    /// Expect a generic 500 when the database is unusable
    async fn database_error_is_internal() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let response = app(&test)
            .oneshot(get("/api/wordlist/readAny/1/5", Some(&issue_token(1))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal server error" })
        );

        Ok(())
    }
}
