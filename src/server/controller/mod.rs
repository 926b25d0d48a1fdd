//! HTTP request handlers.
//!
//! Controllers parse the lenient request body into parameter models, run the guild
//! access guard where required, call into the service layer and convert the result into
//! DTOs. Every failure is answered through `AppError`, which renders the sentinel body.

pub mod auth;
pub mod search;
pub mod server;

#[cfg(test)]
mod test;
