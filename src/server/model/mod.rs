//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models, session records and cache entries at the repository boundary and transformed
//! to DTOs at the controller boundary. Request parameters are validated into these types
//! before any store is touched.

pub mod guild;
pub mod guild_config;
pub mod option;
pub mod request;
pub mod session;
