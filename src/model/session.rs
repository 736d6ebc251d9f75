//! Cookie-backed session context.
//!
//! The session is nothing more than the signed `token` cookie and the `paginationLimit`
//! preference. Both the server (from request headers) and the browser (from
//! `document.cookie`) build a [`SessionContext`] from the raw cookie string and pass it
//! explicitly to whatever needs it.

use cookie::{Cookie, SameSite};
use time::Duration;

/// Cookie holding the signed session token
pub const TOKEN_COOKIE: &str = "token";
/// Cookie holding the preferred rows per page of the word table
pub const PAGINATION_LIMIT_COOKIE: &str = "paginationLimit";
/// Rows per page used when no valid preference is stored
pub const DEFAULT_ROWS_PER_PAGE: u64 = 5;
/// Lifetime of both session cookies
pub const COOKIE_MAX_AGE_DAYS: i64 = 1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub token: Option<String>,
    pub pagination_limit: Option<u64>,
}

impl SessionContext {
    /// Parses a `Cookie` header value (`name=value; name2=value2`)
    ///
    /// Unparseable pairs and unknown cookies are skipped, empty values count as absent.
    pub fn from_cookie_header(header: &str) -> Self {
        let mut session = Self::default();
        session.merge_cookie_header(header);
        session
    }

    /// Adds the cookies of another `Cookie` header, later values win
    pub fn merge_cookie_header(&mut self, header: &str) {
        for cookie in Cookie::split_parse(header).flatten() {
            let value = cookie.value().trim();
            if value.is_empty() {
                continue;
            }

            match cookie.name() {
                TOKEN_COOKIE => self.token = Some(value.to_string()),
                PAGINATION_LIMIT_COOKIE => self.pagination_limit = value.parse().ok(),
                _ => (),
            }
        }
    }

    /// Records the token issued by a successful login, keeping the stored preferences
    pub fn sign_in(&mut self, token: String) {
        let token = token.trim().to_string();
        self.token = (!token.is_empty()).then_some(token);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Rows per page to request, falling back to [`DEFAULT_ROWS_PER_PAGE`]
    pub fn rows_per_page(&self) -> u64 {
        self.pagination_limit
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_ROWS_PER_PAGE)
    }
}

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .max_age(Duration::days(COOKIE_MAX_AGE_DAYS))
        .same_site(SameSite::Lax)
        .build()
}

/// Builds the `token` cookie issued on login
pub fn token_cookie(token: &str) -> Cookie<'static> {
    session_cookie(TOKEN_COOKIE, token.to_string())
}

/// Builds the `paginationLimit` cookie persisted when rows per page changes
pub fn pagination_limit_cookie(limit: u64) -> Cookie<'static> {
    session_cookie(PAGINATION_LIMIT_COOKIE, limit.to_string())
}

/// Builds an expired `token` cookie which removes the session on logout
pub fn token_removal_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .same_site(SameSite::Lax)
        .build()
}
