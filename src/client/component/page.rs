use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn ErrorPage(title: String, message: String) -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            div {
                class: "text-center space-y-2",
                h1 { class: "text-2xl font-bold", "{title}" }
                p { class: "opacity-70", "{message}" }
            }
        }
    )
}
