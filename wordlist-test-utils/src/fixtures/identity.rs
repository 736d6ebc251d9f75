//! Mock identity provider endpoints.

use mockito::Mock;

use crate::{fixtures::factory, TestContext};

pub struct IdentityFixtures<'a> {
    setup: &'a mut TestContext,
}

impl TestContext {
    /// Access identity provider fixture helpers
    pub fn identity(&mut self) -> IdentityFixtures<'_> {
        IdentityFixtures { setup: self }
    }
}

impl<'a> IdentityFixtures<'a> {
    /// Mock `GET /users/{username}` answering with the identity id
    ///
    /// `username` is matched against the raw request path, escape it as it will be sent.
    pub async fn create_user_endpoint(
        &mut self,
        username: &str,
        identity_id: i64,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/users/{}", username).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::user_json(username, identity_id).to_string())
            .expect(expected_requests)
            .create_async()
            .await
    }

    /// Mock `GET /users/{username}` failing with `status`
    pub async fn create_user_error_endpoint(
        &mut self,
        username: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/users/{}", username).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(factory::error_json("Not Found").to_string())
            .expect(expected_requests)
            .create_async()
            .await
    }

    /// Mock `GET /user/{identity_id}` answering with [`factory::profile_json`]
    pub async fn create_profile_endpoint(
        &mut self,
        identity_id: i64,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/user/{}", identity_id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::profile_json(identity_id).to_string())
            .expect(expected_requests)
            .create_async()
            .await
    }

    /// Mock `GET /user/{identity_id}` failing with `status`
    pub async fn create_profile_error_endpoint(
        &mut self,
        identity_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/user/{}", identity_id).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(factory::error_json("Forbidden").to_string())
            .expect(expected_requests)
            .create_async()
            .await
    }
}
