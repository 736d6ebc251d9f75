//! Browser calls to the word list API.
//!
//! Non-success responses are turned into [`ApiError`] carrying the HTTP status, so pages can
//! render the matching error page.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Request failed with status {}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(feature = "web")]
mod web {
    use reqwasm::http::{Request, RequestCredentials, Response};
    use serde::de::DeserializeOwned;
    use wordlist::model::{
        api::{ErrorDto, MessageDto, StatusErrorDto},
        profile::{LoginDto, ProfileDto, TokenDto},
        wordlist::PageResultDto,
    };

    use super::ApiError;

    fn network_error(e: reqwasm::Error) -> ApiError {
        ApiError {
            status: 400,
            message: format!("Failed to send request: {}", e),
        }
    }

    /// Reads a success body or the error payload of any of the API's error shapes
    async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        if (200..300).contains(&status) {
            return response.json::<T>().await.map_err(|e| ApiError {
                status: 500,
                message: format!("Failed to parse response: {}", e),
            });
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = if let Ok(dto) = serde_json::from_str::<StatusErrorDto>(&text) {
            dto.error
        } else if let Ok(dto) = serde_json::from_str::<MessageDto>(&text) {
            dto.message
        } else if let Ok(dto) = serde_json::from_str::<ErrorDto>(&text) {
            dto.error
        } else {
            text
        };

        Err(ApiError { status, message })
    }

    /// Fetch one page of the word list
    pub async fn get_word_page(
        token: &str,
        page: u64,
        rows_per_page: u64,
    ) -> Result<PageResultDto, ApiError> {
        let response = Request::get(&format!("/api/wordlist/readAny/{}/{}", page, rows_per_page))
            .header("Authorization", token)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(network_error)?;

        read_response(response).await
    }

    /// Fetch the identity provider profile of the logged in user
    pub async fn get_profile(token: &str) -> Result<ProfileDto, ApiError> {
        let response = Request::get("/api/profile")
            .header("Authorization", token)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(network_error)?;

        read_response(response).await
    }

    /// Exchange a username for a session token
    pub async fn login(username: &str) -> Result<TokenDto, ApiError> {
        let body = serde_json::to_string(&LoginDto {
            username: username.to_string(),
        })
        .map_err(|e| ApiError {
            status: 400,
            message: e.to_string(),
        })?;

        let response = Request::post("/api/login")
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .body(body)
            .send()
            .await
            .map_err(network_error)?;

        read_response(response).await
    }
}

#[cfg(feature = "web")]
pub use web::{get_profile, get_word_page, login};

/// Outcome of an API call made on behalf of the browser session
#[derive(Clone, Debug, PartialEq)]
pub enum SessionFetch<T> {
    /// No `token` cookie, the page should send the visitor home
    LoggedOut,
    Ready(T),
    Failed(ApiError),
}
