//! Data transfer objects shared between the server API and the dashboard client,
//! plus the dashboard's form and lookup state.

pub mod api;
pub mod config;
pub mod draft;
pub mod guild;
pub mod lookup;
pub mod search;
pub mod server;
