//! Constants shared by tests.

/// Secret used to sign session tokens in tests
pub static TEST_AUTH_SECRET: &str = "test_auth_secret";
