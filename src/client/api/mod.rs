#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod search;

#[cfg(feature = "web")]
pub mod server;

#[cfg(feature = "web")]
pub use auth::get_user;

#[cfg(feature = "web")]
pub use search::{resolve_users, search};

#[cfg(feature = "web")]
pub use server::{get_server_info, save_changes};
