use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TokenDto {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub data: ProfileData,
}

/// Identity provider profile with the avatar exposed in camelCase
///
/// Every field the provider returned is kept verbatim in `provider_fields`, including the
/// original snake-case `avatar_url`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub provider_fields: Map<String, Value>,
}

impl ProfileData {
    /// Builds profile data from the raw provider payload
    pub fn from_provider(provider_fields: Map<String, Value>) -> Self {
        let avatar_url = provider_fields
            .get("avatar_url")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            avatar_url,
            provider_fields,
        }
    }

    /// String field from the provider payload, `None` when missing, null or not a string
    pub fn field(&self, key: &str) -> Option<&str> {
        self.provider_fields.get(key).and_then(Value::as_str)
    }
}
