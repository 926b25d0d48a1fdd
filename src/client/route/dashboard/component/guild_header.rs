use dioxus::prelude::*;

use crate::model::guild::GuildInfoDto;

#[component]
pub fn GuildInfoHeader(guild: GuildInfoDto) -> Element {
    let icon_url = guild.icon_url();

    rsx!(
        div {
            class: "card bg-base-200 mb-8",
            div {
                class: "card-body",
                div {
                    class: "flex items-center gap-4",
                    if let Some(icon_url) = icon_url {
                        img {
                            src: "{icon_url}",
                            alt: "{guild.name} icon",
                            class: "w-16 h-16 rounded-full",
                        }
                    } else {
                        div {
                            class: "w-16 h-16 rounded-full bg-neutral flex items-center justify-center font-bold text-2xl",
                            "{guild.name.chars().next().unwrap_or('?')}"
                        }
                    }
                    div {
                        class: "flex-1",
                        h1 {
                            class: "text-2xl font-bold flex items-center gap-2",
                            "{guild.name}"
                            if guild.large {
                                span { class: "badge badge-secondary", "Large" }
                            }
                        }
                        p {
                            class: "text-sm opacity-70",
                            "Guild ID: {guild.id}"
                        }
                    }
                }
                div {
                    class: "stats stats-vertical sm:stats-horizontal bg-base-100 mt-4",
                    Stat { title: "Members", value: guild.member_count as usize }
                    Stat { title: "Channels", value: guild.channel_count }
                    Stat { title: "Roles", value: guild.role_count }
                    Stat { title: "Emojis", value: guild.emoji_count }
                }
            }
        }
    )
}

#[component]
fn Stat(title: &'static str, value: usize) -> Element {
    rsx!(
        div {
            class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value text-2xl", "{value}" }
        }
    )
}
