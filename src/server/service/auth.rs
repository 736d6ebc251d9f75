use dioxus_logger::tracing;

use crate::server::{
    error::Error,
    service::{identity::IdentityClient, token::TokenCodec},
};

pub struct AuthService<'a> {
    identity: &'a IdentityClient,
    token_codec: &'a TokenCodec,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(identity: &'a IdentityClient, token_codec: &'a TokenCodec) -> Self {
        Self {
            identity,
            token_codec,
        }
    }

    /// Resolves a username with the identity provider and issues a session token for it
    ///
    /// # Returns
    /// - `Ok(String)`: Signed session token for the user's identity id
    /// - `Err(Error::IdentityError)`: Provider rejected the username or could not be reached
    /// - `Err(Error::TokenError)`: Token could not be signed
    pub async fn login(&self, username: &str) -> Result<String, Error> {
        let identity_id = self.identity.find_user_id(username).await?;

        let token = self.token_codec.issue(identity_id)?;

        tracing::debug!(identity_id = %identity_id, "Issued session token");

        Ok(token)
    }
}
