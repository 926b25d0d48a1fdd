//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Applying config patches and building search results
//! - **Orchestration**: Combining the config store with the live guild cache
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Access control happens before a service is called, in `middleware::auth`.

pub mod guild_config;
pub mod search;
pub mod server;

#[cfg(test)]
mod test;
