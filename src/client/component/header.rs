use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{app::SessionContext, SITE_NAME};

#[component]
pub fn Header() -> Element {
    let session = use_context::<SessionContext>();

    let user_id = session.read().data().map(|user| user.id.clone());
    let fetch_completed = session.read().is_settled();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-3",
            Icon {
                width: 28,
                height: 28,
                icon: FaDiscord
            }
            p {
                class: "md:text-xl text-wrap",
                {SITE_NAME}
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(user_id) = user_id {
                span {
                    class: "badge badge-outline",
                    "User {user_id}"
                }
            } else if fetch_completed {
                span {
                    class: "badge badge-warning",
                    "Not logged in"
                }
            }
        }
    })
}
