pub mod api;
pub mod app;
pub mod component;
pub mod model;
pub mod route;
pub mod router;

pub use app::App;

pub const SITE_NAME: &str = "Guild Dashboard";
