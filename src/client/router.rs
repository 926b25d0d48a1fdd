use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Dashboard, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/dashboard/:guild_id")]
    Dashboard { guild_id: u64 },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
