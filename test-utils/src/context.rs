use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test context containing database connection, session store, and test environment setup.
///
/// Provides an in-memory SQLite database connection and a session store for isolated
/// unit and integration testing. Both are created lazily on first access and persist
/// for the lifetime of the test context.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called. Using `Option` allows
    /// deferred connection until actually needed by the test.
    pub db: Option<DatabaseConnection>,

    /// Optional session store backed by the same in-memory database.
    ///
    /// Initialized lazily when `session_store()` is first called. Dashboard sessions
    /// are written into this store by the session factory.
    pub session_store: Option<SqliteStore>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self {
            db: None,
            session_store: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// Returns a reference to the existing database connection if one exists, otherwise
    /// creates a new in-memory SQLite database and stores the connection. The connection
    /// persists for the lifetime of this test context.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the session store.
    ///
    /// On first call the database connection is initialized if needed, then the
    /// `tower_sessions` table is created on the same pool. Subsequent calls return the
    /// same store instance.
    ///
    /// # Returns
    /// - `Ok(&SqliteStore)` - Reference to the session store
    /// - `Err(TestError::Database)` - Failed to initialize database or session table
    pub async fn session_store(&mut self) -> Result<&SqliteStore, TestError> {
        match self.session_store {
            Some(ref store) => Ok(store),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let store = SqliteStore::new(pool.clone());

                store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let store_ref = self.session_store.insert(store);

                Ok(&*store_ref)
            }
        }
    }

    /// Gets or creates both database and session store references.
    ///
    /// Convenience method for tests that need both. Avoids borrow checker issues when
    /// calling `database()` and `session_store()` separately.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &SqliteStore))` - References to both
    /// - `Err(TestError::Database)` - Failed to initialize database or session store
    pub async fn db_and_store(&mut self) -> Result<(&DatabaseConnection, &SqliteStore), TestError> {
        self.database().await?;
        self.session_store().await?;

        match (self.db.as_ref(), self.session_store.as_ref()) {
            (Some(db), Some(store)) => Ok((db, store)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
