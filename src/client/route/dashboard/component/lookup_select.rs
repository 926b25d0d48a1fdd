use std::collections::HashMap;

use dioxus::prelude::*;

use crate::{
    client::component::{DropdownItem, SearchableDropdown, SelectedItem, SelectedItemsList},
    model::lookup::{LookupSlot, Lookups},
};

/// Selector for a single user, role or channel ID backed by a debounced lookup.
#[component]
pub fn LookupSelect(
    slot: LookupSlot,
    lookups: Signal<Lookups>,
    /// Known labels by ID, used to show the current selection
    labels: Signal<HashMap<String, String>>,
    placeholder: String,
    selected: Option<String>,
    on_search: EventHandler<(LookupSlot, String)>,
    on_change: EventHandler<Option<String>>,
) -> Element {
    let options = lookups.read().options(slot).to_vec();
    let loading = lookups.read().is_loading(slot);
    let display_value = selected.as_ref().map(|id| label_for(&labels.read(), id));

    rsx! {
        div {
            class: "flex gap-2 items-start",
            div {
                class: "grow",
                SearchableDropdown {
                    placeholder,
                    display_value,
                    loading,
                    has_items: !options.is_empty(),
                    on_search: move |query: String| on_search.call((slot, query)),
                    for option in options {
                        {
                            let is_selected = selected.as_deref() == Some(option.value.as_str());
                            let value = option.value.clone();
                            rsx! {
                                DropdownItem {
                                    key: "{option.value}",
                                    selected: is_selected,
                                    on_select: move |_| on_change.call(Some(value.clone())),
                                    "{option.label}"
                                }
                            }
                        }
                    }
                }
            }
            if selected.is_some() {
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    onclick: move |_| on_change.call(None),
                    "Clear"
                }
            }
        }
    }
}

/// Selector for the trusted user list.
#[component]
pub fn TrustedUsersSelect(
    lookups: Signal<Lookups>,
    labels: Signal<HashMap<String, String>>,
    trusted: Vec<String>,
    disabled: bool,
    on_search: EventHandler<(LookupSlot, String)>,
    on_change: EventHandler<Vec<String>>,
) -> Element {
    let slot = LookupSlot::TrustedUsers;
    let options = lookups.read().options(slot).to_vec();
    let loading = lookups.read().is_loading(slot);
    let entries: Vec<(String, String)> = trusted
        .iter()
        .map(|id| (id.clone(), label_for(&labels.read(), id)))
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-2",
            SearchableDropdown {
                placeholder: "Search members to trust",
                display_value: None,
                disabled,
                loading,
                has_items: !options.is_empty(),
                on_search: move |query: String| on_search.call((slot, query)),
                for option in options {
                    {
                        let is_selected = trusted.contains(&option.value);
                        let value = option.value.clone();
                        let current = trusted.clone();
                        rsx! {
                            DropdownItem {
                                key: "{option.value}",
                                selected: is_selected,
                                on_select: move |_| {
                                    if !current.contains(&value) {
                                        let mut updated = current.clone();
                                        updated.push(value.clone());
                                        on_change.call(updated);
                                    }
                                },
                                "{option.label}"
                            }
                        }
                    }
                }
            }
            SelectedItemsList {
                empty_message: "No trusted users",
                is_empty: entries.is_empty(),
                for (id, label) in entries {
                    {
                        let remaining: Vec<String> =
                            trusted.iter().filter(|t| **t != id).cloned().collect();
                        rsx! {
                            SelectedItem {
                                key: "{id}",
                                disabled,
                                on_remove: move |_| on_change.call(remaining.clone()),
                                div {
                                    class: "flex flex-col",
                                    span { class: "font-semibold", "{label}" }
                                    span { class: "text-xs opacity-50", "{id}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn label_for(labels: &HashMap<String, String>, id: &str) -> String {
    labels.get(id).cloned().unwrap_or_else(|| id.to_string())
}
