use axum::http::{header, HeaderMap};

use crate::model::session::SessionContext;

/// Builds the session context from every `Cookie` header of a request
pub fn session_from_headers(headers: &HeaderMap) -> SessionContext {
    let mut session = SessionContext::default();

    for value in headers.get_all(header::COOKIE) {
        if let Ok(value) = value.to_str() {
            session.merge_cookie_header(value);
        }
    }

    session
}
