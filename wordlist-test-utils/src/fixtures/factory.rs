//! Deterministic fixture values.
//!
//! Generated words are numbered from 1 and cycle through the eight seeded parts of speech, so
//! a test can derive the expected row for any id.

use serde_json::{json, Value};

/// Avatar URL returned by the mock profile endpoint
pub const PROFILE_AVATAR_URL: &str = "https://avatars.example.com/u/583231";

/// Login returned by the mock profile endpoint
pub const PROFILE_LOGIN: &str = "octocat";

/// Text of the generated word with the given id
pub fn word_text(id: i32) -> String {
    format!("word-{:03}", id)
}

/// Part of speech id assigned to the generated word with the given id
pub fn type_id_for(id: i32) -> i32 {
    let count = migration::PART_OF_SPEECH_TYPES.len() as i32;

    (id - 1).rem_euclid(count) + 1
}

/// Part of speech name assigned to the generated word with the given id
pub fn type_name_for(id: i32) -> &'static str {
    let type_id = type_id_for(id);

    migration::PART_OF_SPEECH_TYPES
        .iter()
        .find(|(id, _)| *id == type_id)
        .map(|(_, name)| *name)
        .unwrap_or_default()
}

/// Body of the identity provider's username lookup
pub fn user_json(username: &str, identity_id: i64) -> Value {
    json!({
        "login": username,
        "id": identity_id,
    })
}

/// Body of the identity provider's profile lookup
pub fn profile_json(identity_id: i64) -> Value {
    json!({
        "login": PROFILE_LOGIN,
        "id": identity_id,
        "avatar_url": PROFILE_AVATAR_URL,
        "name": "The Octocat",
        "bio": null,
    })
}

/// Body of an identity provider error response
pub fn error_json(message: &str) -> Value {
    json!({ "message": message })
}
