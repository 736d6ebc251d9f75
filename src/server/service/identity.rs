//! Identity provider client.
//!
//! Resolves public usernames to numeric identity ids and numeric ids to profile data with a
//! single request each. The provider is expected to expose `GET /users/{username}` and
//! `GET /user/{id}` returning JSON objects.

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::server::error::identity::IdentityError;

#[derive(Deserialize)]
struct IdentityUser {
    id: i64,
}

/// HTTP client for the identity provider
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdentityClient {
    /// Creates a client sending requests to `base_url`
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Looks up the numeric identity id of a username
    ///
    /// # Returns
    /// - `Ok(i64)`: The provider knows the username
    /// - `Err(IdentityError::Upstream)`: Provider responded with a non-success status
    /// - `Err(IdentityError::Request)`: Provider unreachable or response not understood
    pub async fn find_user_id(&self, username: &str) -> Result<i64, IdentityError> {
        let url = self.endpoint(&["users", username])?;

        let user: IdentityUser = self.get_json(url).await?;

        Ok(user.id)
    }

    /// Fetches the provider's profile object for an identity id
    pub async fn get_profile(&self, identity_id: i64) -> Result<Map<String, Value>, IdentityError> {
        let url = self.endpoint(&["user", &identity_id.to_string()])?;

        self.get_json(url).await
    }

    /// Joins escaped path segments onto the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url, IdentityError> {
        let invalid = || IdentityError::InvalidBaseUrl(self.base_url.clone());

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, IdentityError> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(upstream_error(status));
        }

        Ok(response.json::<T>().await?)
    }
}

fn upstream_error(status: StatusCode) -> IdentityError {
    IdentityError::Upstream {
        status,
        message: status.canonical_reason().unwrap_or("Unknown").to_string(),
    }
}
