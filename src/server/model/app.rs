use sea_orm::DatabaseConnection;

use crate::server::service::{identity::IdentityClient, token::TokenCodec};

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: IdentityClient,
    pub token_codec: TokenCodec,
}

/// Builds state from a database, an identity provider base URL and a signing secret
///
/// Used by tests to construct state without reading the environment.
impl From<(DatabaseConnection, String, String)> for AppState {
    fn from((db, identity_api_url, auth_secret): (DatabaseConnection, String, String)) -> Self {
        Self {
            db,
            identity: IdentityClient::new(reqwest::Client::new(), identity_api_url),
            token_codec: TokenCodec::new(&auth_secret),
        }
    }
}
