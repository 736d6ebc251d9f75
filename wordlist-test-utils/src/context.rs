//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_AUTH_SECRET, error::TestError};

/// In-memory database plus a mock identity provider
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_wordlist_tables()
///     .with_user_endpoint("octocat", 583231, 1)
///     .build()
///     .await?;
///
/// let state: AppState = test.to_app_state();
/// // ...
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server standing in for the identity provider
    pub(crate) server: ServerGuard,
    /// Mock endpoints kept alive for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Base URL of the mock identity provider
    pub fn identity_api_url(&self) -> String {
        self.server.url()
    }

    /// Convert the database, mock provider URL and test secret into application state
    ///
    /// Keeps the test utilities free of a dependency on the application crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String, String)>,
    {
        T::from((
            self.db.clone(),
            self.identity_api_url(),
            TEST_AUTH_SECRET.to_string(),
        ))
    }

    /// Assert every mock endpoint was called the expected number of times
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
