//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's gateway would deliver in a `GUILD_CREATE` payload.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, TestGuildBuilder};
//!
//! let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));
//!
//! let guild = TestGuildBuilder::new(123456789, "Test Guild")
//!     .owner_id(42)
//!     .role(111, "Muted")
//!     .text_channel(222, "mod-log")
//!     .member(42, "owner", None)
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Guild with no roles, channels or members
//! - `guild::TestGuildBuilder` - Guild with customizable roles, channels, members, emojis

pub mod guild;

pub use guild::{create_test_guild, TestGuildBuilder};
