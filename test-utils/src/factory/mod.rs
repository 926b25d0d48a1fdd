//! Factory methods for creating test data.
//!
//! Factories insert rows (or session records) with sensible defaults, reducing boilerplate
//! in tests. Each factory has a builder struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let config = factory::create_guild_config(db, "123456789").await?;
//!
//! let session_id = factory::session::SessionFactory::new(store)
//!     .user_id("42")
//!     .server(fixture::session::managed_server("123456789"))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild_config` - Create guild configuration rows
//! - `session` - Create dashboard session records in the session store
//! - `helpers` - Unique ID generation

pub mod guild_config;
pub mod helpers;
pub mod session;

pub use guild_config::create_guild_config;
pub use session::create_session;
