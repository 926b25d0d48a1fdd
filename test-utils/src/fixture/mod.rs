//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data anywhere. Use them for unit tests of
//! conversions and as inputs to factories.

pub mod guild_config;
pub mod session;
