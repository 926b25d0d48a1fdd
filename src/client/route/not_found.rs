use dioxus::prelude::*;

use crate::client::component::ErrorPage;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        ErrorPage {
            title: "Page not found",
            message: "Nothing lives at /{path}. Open a server's dashboard from the bot's server list.",
        }
    }
}
