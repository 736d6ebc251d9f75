//! Signed session tokens.
//!
//! Tokens are HS256 JSON web tokens carrying the identity provider id in `sub`. Verification
//! never fails loudly: anything that is malformed, expired or signed with another secret is
//! logged at debug level and reported as `None`.

use chrono::{TimeDelta, Utc};
use dioxus_logger::tracing;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::Error;

/// Claims carried by a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Identity provider id
    pub sub: String,
    /// Issued at, seconds since the epoch
    pub iat: i64,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// Issues and verifies session tokens with a process-wide secret
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: TimeDelta,
}

impl TokenCodec {
    /// Creates a codec signing with `secret`, tokens are valid for one day
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime: TimeDelta::days(1),
        }
    }

    /// Overrides how long issued tokens stay valid
    pub fn with_lifetime(mut self, lifetime: TimeDelta) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Signs a token for the provided identity id
    pub fn issue(&self, identity_id: i64) -> Result<String, Error> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: identity_id.to_string(),
            iat,
            exp: iat + self.lifetime.num_seconds(),
        };

        let token =
            jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(token)
    }

    /// Returns the identity id of a valid token
    ///
    /// Tolerates a leading `Bearer ` scheme.
    pub fn verify(&self, token: &str) -> Option<i64> {
        let token = token.strip_prefix("Bearer ").unwrap_or(token).trim();

        let decoded = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation);

        let claims = match decoded {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!("Session token rejected: {}", e);
                return None;
            }
        };

        match claims.sub.parse::<i64>() {
            Ok(identity_id) => Some(identity_id),
            Err(e) => {
                tracing::debug!(sub = %claims.sub, "Session token subject is not an id: {}", e);
                None
            }
        }
    }
}
