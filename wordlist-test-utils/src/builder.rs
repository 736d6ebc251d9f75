//! Declarative test builder.
//!
//! Configuration methods only queue work; tables, rows and mock endpoints are created in that
//! order by the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// ```no_run
/// use wordlist_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), wordlist_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_wordlist_tables()
///     .with_seeded_types()
///     .with_words(12)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_wordlist_tables: bool,

    seed_types: bool,
    words: i32,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    user_endpoints: Vec<(String, i64, usize)>, // (username, identity_id, expected_requests)
    user_error_endpoints: Vec<(String, usize, usize)>, // (username, status, expected_requests)
    profile_endpoints: Vec<(i64, usize)>,
    profile_error_endpoints: Vec<(i64, usize, usize)>, // (identity_id, status, expected_requests)
}

impl TestBuilder {
    /// Create an empty builder: no tables, rows or mock endpoints
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_wordlist_tables: false,
            seed_types: false,
            words: 0,
            mock_builders: Vec::new(),
            user_endpoints: Vec::new(),
            user_error_endpoints: Vec::new(),
            profile_endpoints: Vec::new(),
            profile_error_endpoints: Vec::new(),
        }
    }

    /// Create the `types` and `words` tables
    pub fn with_wordlist_tables(mut self) -> Self {
        self.include_wordlist_tables = true;
        self
    }

    /// Create the table of a custom entity
    ///
    /// Chain multiple calls to add multiple tables, they are created in call order after the
    /// word list tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert the eight part of speech rows
    pub fn with_seeded_types(mut self) -> Self {
        self.seed_types = true;
        self
    }

    /// Insert `count` generated words with ids starting at 1
    ///
    /// Requires [`with_seeded_types`](Self::with_seeded_types).
    pub fn with_words(mut self, count: i32) -> Self {
        self.words = count;
        self
    }

    /// Mock the username lookup of the identity provider
    ///
    /// # Arguments
    /// - `username` - Path segment as sent by the client, already escaped
    /// - `identity_id` - Id returned for the username
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_user_endpoint(
        mut self,
        username: impl Into<String>,
        identity_id: i64,
        expected_requests: usize,
    ) -> Self {
        self.user_endpoints
            .push((username.into(), identity_id, expected_requests));
        self
    }

    /// Mock a failing username lookup answering with `status`
    pub fn with_user_error_endpoint(
        mut self,
        username: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.user_error_endpoints
            .push((username.into(), status, expected_requests));
        self
    }

    /// Mock the profile lookup of the identity provider
    pub fn with_profile_endpoint(mut self, identity_id: i64, expected_requests: usize) -> Self {
        self.profile_endpoints.push((identity_id, expected_requests));
        self
    }

    /// Mock a failing profile lookup answering with `status`
    pub fn with_profile_error_endpoint(
        mut self,
        identity_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.profile_error_endpoints
            .push((identity_id, status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Tables, rows and mock endpoints are in place
    /// - `Err(TestError::DbErr)` - Table creation or row insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_wordlist_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Types),
                schema.create_table_from_entity(entity::prelude::Words),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert rows
        if self.seed_types {
            setup.words().insert_seeded_types().await?;
        }

        setup.words().insert_words(self.words).await?;

        // 3. Create mock endpoints, custom ones first so tests can stack mocks on one path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (username, identity_id, expected) in self.user_endpoints {
            mocks.push(
                setup
                    .identity()
                    .create_user_endpoint(&username, identity_id, expected)
                    .await,
            );
        }

        for (username, status, expected) in self.user_error_endpoints {
            mocks.push(
                setup
                    .identity()
                    .create_user_error_endpoint(&username, status, expected)
                    .await,
            );
        }

        for (identity_id, expected) in self.profile_endpoints {
            mocks.push(
                setup
                    .identity()
                    .create_profile_endpoint(identity_id, expected)
                    .await,
            );
        }

        for (identity_id, status, expected) in self.profile_error_endpoints {
            mocks.push(
                setup
                    .identity()
                    .create_profile_error_endpoint(identity_id, status, expected)
                    .await,
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
