//! Browser cookie access.
//!
//! The browser session is read from `document.cookie` once by `App` and shared through a
//! [`SessionState`] context signal. Page loaders re-read the cookie before each fetch.

use cookie::Cookie;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use wordlist::model::session::SessionContext;

use crate::client::store::session::SessionState;

/// Reads the session cookies of the current document
pub async fn read_session() -> SessionContext {
    match document::eval("return document.cookie;").join::<String>().await {
        Ok(cookies) => SessionContext::from_cookie_header(&cookies),
        Err(e) => {
            tracing::debug!("Failed to read document cookies: {:?}", e);
            SessionContext::default()
        }
    }
}

/// Session shared by the layout and pages, updated in place on login
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Stores a cookie in the current document
pub fn set_cookie(cookie: Cookie<'static>) {
    let value = serde_json::Value::String(cookie.to_string());

    document::eval(&format!("document.cookie = {};", value));
}

/// Full page load of `path`, dropping every cached client state
pub fn reload_to(path: &str) {
    let path = serde_json::Value::String(path.to_string());

    document::eval(&format!("window.location.assign({});", path));
}
