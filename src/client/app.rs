use dioxus::prelude::*;

use crate::{
    client::{model::cache::Cache, router::Route, SITE_NAME},
    model::server::SessionUserDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_user;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Session of the logged in user, shared with every page.
pub type SessionContext = Signal<Cache<SessionUserDto>>;

#[component]
pub fn App() -> Element {
    let mut session: SessionContext = use_context_provider(|| Signal::new(Cache::NotFetched));

    // Fetch the session user on first load
    #[cfg(feature = "web")]
    use_future(move || async move {
        session.set(Cache::Loading);
        match get_user().await {
            Ok(user) => session.set(Cache::Fetched(user)),
            Err(err) => {
                tracing::warn!("Failed to fetch session user: {}", err);
                session.set(Cache::Error(err));
            }
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: "Configure your Discord bot's prefix, trusted users, mute role and log channels"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
