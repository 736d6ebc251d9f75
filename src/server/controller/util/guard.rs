//! Session guard for server-rendered pages.
//!
//! Pages that need a session redirect to the home page before anything is rendered when the
//! request carries no `token` cookie. The token itself is verified later by the API.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::server::model::session::session_from_headers;

/// Page path prefixes which require a session
pub const PROTECTED_PAGES: [&str; 2] = ["/wordlist", "/profile"];

/// Whether `path` is one of the protected pages or below one
pub fn is_protected_page(path: &str) -> bool {
    PROTECTED_PAGES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Middleware redirecting session-less requests for protected pages to `/`
pub async fn require_session_cookie(request: Request, next: Next) -> Response {
    if is_protected_page(request.uri().path())
        && !session_from_headers(request.headers()).is_authenticated()
    {
        return (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response();
    }

    next.run(request).await
}
