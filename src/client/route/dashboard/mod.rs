//! Per-guild settings page.
//!
//! The page loads the guild's stored config together with its live info, binds the
//! form to a [`ConfigDraft`], and runs the user, role and channel lookups through a
//! component-owned [`Lookups`] so that superseded timers and responses are ignored.

pub mod component;

use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCircleExclamation, Icon};

use crate::{
    client::{
        app::SessionContext,
        SITE_NAME,
        component::{ErrorPage, LoadingPage, Page},
        model::{cache::Cache, error::ApiError},
    },
    model::{
        config::GuildConfigDto,
        draft::ConfigDraft,
        guild::GuildInfoDto,
        lookup::{LookupSlot, Lookups},
        search::SelectOptionDto,
    },
};

use component::{GuildInfoHeader, LookupSelect, SaveFooter, TrustedUsersSelect};

#[cfg(feature = "web")]
use crate::{
    client::api::{get_server_info, resolve_users, save_changes, search},
    model::lookup::DEBOUNCE_DELAY_MS,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Dashboard(guild_id: u64) -> Element {
    let session = use_context::<SessionContext>();
    let mut guild = use_signal(|| Cache::<GuildInfoDto>::NotFetched);
    let mut draft = use_signal(|| None::<ConfigDraft>);
    let mut lookups = use_signal(Lookups::default);
    let mut labels = use_signal(HashMap::<String, String>::new);
    let mut save_error = use_signal(|| None::<ApiError>);

    // Load config and guild info once the session user is known
    #[cfg(feature = "web")]
    use_effect(use_reactive!(|guild_id| {
        let Some(user) = session.read().data().cloned() else {
            return;
        };

        spawn(async move {
            guild.set(Cache::Loading);

            let data = match get_server_info(guild_id, &user).await {
                Ok(data) => data,
                Err(err) => {
                    tracing::error!("Failed to fetch server info for {}: {}", guild_id, err);
                    guild.set(Cache::Error(err));
                    return;
                }
            };

            let trusted = data.config.users.trusted.clone();
            draft.set(Some(ConfigDraft::new(data.config)));
            guild.set(Cache::Fetched(data.info));
            *lookups.write() = Lookups::default();

            if trusted.is_empty() {
                return;
            }

            match resolve_users(trusted, guild_id, &user).await {
                Ok(options) => {
                    remember_labels(labels, &options);
                    lookups.write().seed(LookupSlot::TrustedUsers, options);
                }
                Err(err) => tracing::warn!("Failed to resolve trusted users: {}", err),
            }
        });
    }));

    let schedule_lookup = move |(slot, query): (LookupSlot, String)| {
        let Some(ticket) = lookups.write().input(slot, &query) else {
            return;
        };

        #[cfg(feature = "web")]
        {
            let Some(user) = session.read().data().cloned() else {
                return;
            };

            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(DEBOUNCE_DELAY_MS).await;

                if !lookups.write().begin(&ticket) {
                    return;
                }

                match search(slot.kind(), &ticket.query, guild_id, &user).await {
                    Ok(options) => {
                        remember_labels(labels, &options);
                        lookups.write().resolve(&ticket, options);
                    }
                    Err(err) => {
                        tracing::warn!("{:?} lookup failed: {}", slot.kind(), err);
                        lookups.write().fail(&ticket);
                    }
                }
            });
        }

        #[cfg(not(feature = "web"))]
        let _ = ticket;
    };

    let on_save = move |_| {
        #[cfg(feature = "web")]
        {
            let Some(user) = session.read().data().cloned() else {
                return;
            };
            let Some(config) = with_draft(draft, ConfigDraft::begin_save).flatten() else {
                return;
            };
            save_error.set(None);

            spawn(async move {
                match save_changes(guild_id, &user, config).await {
                    Ok(ack) => {
                        with_draft(draft, |d| d.acknowledge(ack.config));
                    }
                    Err(err) => {
                        tracing::error!("Failed to save config for {}: {}", guild_id, err);
                        with_draft(draft, ConfigDraft::reject);
                        save_error.set(Some(err));
                    }
                }
            });
        }
    };

    let on_reset = move |_| {
        with_draft(draft, ConfigDraft::reset);
        save_error.set(None);
    };

    let session_error = session.read().error().cloned();
    let guild_error = guild.read().error().cloned();
    let guild_info = guild.read().data().cloned();
    let form = draft.read().clone();
    let is_owner = match (session.read().data(), guild_info.as_ref()) {
        (Some(user), Some(info)) => user.id == info.owner_id,
        _ => false,
    };
    let guild_name = guild_info
        .as_ref()
        .map(|g| g.name.clone())
        .unwrap_or_else(|| "Server".to_string());

    rsx! {
        Title { "{guild_name} | {SITE_NAME}" }
        if let Some(err) = session_error {
            ErrorPage { title: "Not logged in", message: err.message() }
        } else if let Some(err) = guild_error {
            ErrorPage { title: "Unable to open this server", message: err.message() }
        } else if let (Some(info), Some(form)) = (guild_info, form) {
            Page {
                class: "flex flex-col items-center w-full h-full pb-32",
                div {
                    class: "w-full max-w-4xl",
                    GuildInfoHeader { guild: info }
                    if let Some(err) = save_error() {
                        div {
                            role: "alert",
                            class: "alert alert-error mb-6",
                            Icon { width: 18, height: 18, icon: FaCircleExclamation }
                            span { "{err.message()}" }
                        }
                    }
                    ConfigForm {
                        config: form.draft().clone(),
                        is_owner,
                        lookups,
                        labels,
                        draft,
                        on_search: schedule_lookup,
                    }
                }
                if form.is_dirty() {
                    SaveFooter {
                        saving: form.is_saving(),
                        on_reset,
                        on_save,
                    }
                }
            }
        } else {
            LoadingPage { }
        }
    }
}

/// The settings sections, bound to the draft.
#[component]
fn ConfigForm(
    config: GuildConfigDto,
    is_owner: bool,
    lookups: Signal<Lookups>,
    labels: Signal<HashMap<String, String>>,
    draft: Signal<Option<ConfigDraft>>,
    on_search: EventHandler<(LookupSlot, String)>,
) -> Element {
    rsx! {
        div {
            class: "space-y-6",
            Section {
                title: "General",
                Field {
                    label: "Command prefix",
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full max-w-xs",
                        maxlength: 16,
                        value: "{config.prefix}",
                        oninput: move |evt| {
                            let prefix = evt.value();
                            with_draft(draft, |d| d.edit(|c| c.prefix = prefix));
                        },
                    }
                }
            }
            Section {
                title: "Users",
                Field {
                    label: "Trusted users",
                    hint: if is_owner { None } else { Some("Only the server owner can change trusted users.".to_string()) },
                    TrustedUsersSelect {
                        lookups,
                        labels,
                        trusted: config.users.trusted.clone(),
                        disabled: !is_owner,
                        on_search,
                        on_change: move |trusted: Vec<String>| {
                            with_draft(draft, |d| d.edit(|c| c.users.trusted = trusted));
                        },
                    }
                }
            }
            Section {
                title: "Roles",
                Field {
                    label: "Mute role",
                    LookupSelect {
                        slot: LookupSlot::MuteRole,
                        lookups,
                        labels,
                        placeholder: "Search roles",
                        selected: config.roles.mute_role.clone(),
                        on_search,
                        on_change: move |role: Option<String>| {
                            with_draft(draft, |d| d.edit(|c| c.roles.mute_role = role));
                        },
                    }
                }
            }
            Section {
                title: "Log channels",
                Field {
                    label: "Join log",
                    LookupSelect {
                        slot: LookupSlot::JoinLog,
                        lookups,
                        labels,
                        placeholder: "Search channels",
                        selected: config.channels.join_log.clone(),
                        on_search,
                        on_change: move |channel: Option<String>| {
                            with_draft(draft, |d| d.edit(|c| c.channels.join_log = channel));
                        },
                    }
                }
                Field {
                    label: "Exit log",
                    LookupSelect {
                        slot: LookupSlot::ExitLog,
                        lookups,
                        labels,
                        placeholder: "Search channels",
                        selected: config.channels.exit_log.clone(),
                        on_search,
                        on_change: move |channel: Option<String>| {
                            with_draft(draft, |d| d.edit(|c| c.channels.exit_log = channel));
                        },
                    }
                }
                Field {
                    label: "Moderation log",
                    LookupSelect {
                        slot: LookupSlot::ModLog,
                        lookups,
                        labels,
                        placeholder: "Search channels",
                        selected: config.channels.mod_log.clone(),
                        on_search,
                        on_change: move |channel: Option<String>| {
                            with_draft(draft, |d| d.edit(|c| c.channels.mod_log = channel));
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn Section(title: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "{title}" }
                {children}
            }
        }
    }
}

#[component]
fn Field(label: &'static str, hint: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-1",
            span { class: "label-text font-semibold", "{label}" }
            {children}
            if let Some(hint) = hint {
                span { class: "text-xs opacity-60", "{hint}" }
            }
        }
    }
}

/// Applies `f` to the draft once it has been loaded.
fn with_draft<R>(
    mut draft: Signal<Option<ConfigDraft>>,
    f: impl FnOnce(&mut ConfigDraft) -> R,
) -> Option<R> {
    match &mut *draft.write() {
        Some(draft) => Some(f(draft)),
        None => None,
    }
}

fn remember_labels(mut labels: Signal<HashMap<String, String>>, options: &[SelectOptionDto]) {
    let mut labels = labels.write();
    for option in options {
        labels.insert(option.value.clone(), option.label.clone());
    }
}
