use dioxus::prelude::*;

/// Empty state shown inside a card while there is nothing to list.
#[component]
pub fn Placeholder(message: String) -> Element {
    rsx! {
        p { class: "placeholder", "{message}" }
    }
}

/// Full-screen state shown while the session is being read.
#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div {
            class: "screen screen-centered",
            p { class: "placeholder", "불러오는 중..." }
        }
    }
}
