use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaFloppyDisk, FaRotateLeft},
    Icon,
};

/// Sticky bar shown while the form holds unsaved changes.
#[component]
pub fn SaveFooter(saving: bool, on_reset: EventHandler<()>, on_save: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed bottom-0 left-0 w-full bg-base-300 border-t border-base-content/10 p-4 z-20",
            div {
                class: "max-w-4xl mx-auto flex items-center justify-between gap-4",
                p { "You have unsaved changes." }
                div {
                    class: "flex gap-2",
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        onclick: move |_| on_reset.call(()),
                        Icon { width: 16, height: 16, icon: FaRotateLeft }
                        "Reset"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        disabled: saving,
                        onclick: move |_| on_save.call(()),
                        if saving {
                            span { class: "loading loading-spinner loading-sm" }
                        } else {
                            Icon { width: 16, height: 16, icon: FaFloppyDisk }
                        }
                        "Save"
                    }
                }
            }
        }
    }
}
