//! Guild Dashboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the guild
//! dashboard. This crate offers a builder pattern for creating test contexts with an in-memory
//! SQLite database, customizable table schemas and a session store sharing the same pool.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session store
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts config rows and session records with sensible defaults
//! - **fixture**: In-memory models that are never persisted
//! - **serenity**: Builds Serenity `Guild` objects from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildConfig;
//!
//! #[tokio::test]
//! async fn test_config_operations() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new()
//!         .with_table(GuildConfig)
//!         .with_session_store()
//!         .build()
//!         .await?;
//!
//!     let (db, store) = test.db_and_store().await?;
//!     // Perform operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
